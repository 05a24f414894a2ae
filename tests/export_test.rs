mod common;

use anyhow::Result;
use budgetbook::io::{Exporter, SessionSnapshot};
use common::{run_session_with, test_service, StandardBudget};
use tempfile::TempDir;

#[test]
fn test_export_entries_csv() -> Result<()> {
    let mut service = test_service();
    StandardBudget::create(&mut service)?;
    service.record_entry("expense", "Coffee, large", "3.5")?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_entries_csv(&mut buffer)?;
    assert_eq!(count, 5);

    let csv = String::from_utf8(buffer)?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "type,id,description,value");
    assert_eq!(lines[1], "income,0,Salary,2500.00");
    assert_eq!(lines[4], "expense,1,Groceries,312.75");
    assert_eq!(lines[5], "expense,2,\"Coffee, large\",3.50");
    Ok(())
}

#[test]
fn test_export_empty_csv_has_header_only() -> Result<()> {
    let service = test_service();
    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_entries_csv(&mut buffer)?;

    assert_eq!(count, 0);
    assert_eq!(String::from_utf8(buffer)?, "type,id,description,value\n");
    Ok(())
}

#[test]
fn test_export_snapshot_json() -> Result<()> {
    let mut service = test_service();
    StandardBudget::create(&mut service)?;

    let mut buffer = Vec::new();
    let snapshot = Exporter::new(&service).export_snapshot_json(&mut buffer)?;
    assert_eq!(snapshot.entries.len(), 4);
    assert_eq!(snapshot.totals, service.totals());

    let parsed: SessionSnapshot = serde_json::from_slice(&buffer)?;
    assert_eq!(parsed.month, "October 2026");
    assert_eq!(parsed.entries, service.ledger().entries());
    assert_eq!(parsed.totals.balance, 170775);

    let raw: serde_json::Value = serde_json::from_slice(&buffer)?;
    assert_eq!(raw["entries"][2]["type"], "expense");
    Ok(())
}

#[test]
fn test_session_export_to_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("entries.csv");

    let mut service = test_service();
    StandardBudget::create(&mut service)?;
    let script = format!("export csv {}\n", path.display());
    let (_, output) = run_session_with(service, &script, false)?;

    assert!(output.contains("Exported 4 entries as csv"));
    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written.lines().count(), 5);
    Ok(())
}

#[test]
fn test_session_export_to_stdout() -> Result<()> {
    let mut service = test_service();
    StandardBudget::create(&mut service)?;

    let (_, output) = run_session_with(service, "export csv\n", false)?;
    assert!(output.contains("type,id,description,value\nincome,0,Salary,2500.00\n"));
    Ok(())
}

#[test]
fn test_session_export_failure_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("missing").join("entries.csv");

    let script = format!("export json {}\nadd income 1 Tip\n", path.display());
    let (service, output) = run_session_with(test_service(), &script, false)?;

    assert!(output.contains("Error: Export failed: Failed to create output file"));
    assert_eq!(service.ledger().len(), 1);
    Ok(())
}
