mod common;

use anyhow::Result;
use budgetbook::domain::EntryType;
use common::{run_session, run_session_with, test_service, StandardBudget};

#[test]
fn test_session_prints_summary_on_start() -> Result<()> {
    let (_, output) = run_session("", false)?;

    assert!(output.starts_with("Available budget in October 2026:\n  0.00\n"));
    assert!(output.contains("+ 0.00"));
    assert!(output.contains("- 0.00"));
    Ok(())
}

#[test]
fn test_add_renders_entry_and_refreshes_totals() -> Result<()> {
    let (service, output) = run_session("add income 1000 Salary\n", false)?;

    assert_eq!(service.sum_by_type(EntryType::Income), 100000);
    assert!(output.contains("Added income-0"));
    assert!(output.contains("Salary"));
    assert!(output.contains("  + 1,000.00\n"));
    Ok(())
}

#[test]
fn test_rejected_input_is_reported_and_session_continues() -> Result<()> {
    let script = "\
add savings 10 Piggy
add expense 0 Nothing
add expense 12.5
bogus
rm expense-4
add expense 12.5 Lunch
";
    let (service, output) = run_session(script, true)?;

    assert!(output.contains("Error: Invalid entry type: 'savings'"));
    assert!(output.contains("Error: Value must not be zero"));
    assert!(output.contains("Error: Description must not be empty"));
    assert!(output.contains("Error: Unknown command 'bogus'"));
    assert!(output.contains("Error: Entry not found: expense-4"));

    // Only the last add went through
    assert_eq!(service.ledger().len(), 1);
    assert_eq!(service.sum_by_type(EntryType::Expense), 1250);
    Ok(())
}

#[test]
fn test_delete_asks_for_confirmation() -> Result<()> {
    let mut service = test_service();
    StandardBudget::create(&mut service)?;

    let (service, output) = run_session_with(service, "rm expense-0\nyes\n", false)?;

    assert!(output.contains("Delete expense-0 (Rent - 900.00)? [y/N]"));
    assert!(output.contains("Removed expense-0"));
    assert!(service.ledger().get(EntryType::Expense, 0).is_none());
    assert_eq!(service.sum_by_type(EntryType::Expense), 31275);
    Ok(())
}

#[test]
fn test_delete_declined_keeps_entry() -> Result<()> {
    let mut service = test_service();
    StandardBudget::create(&mut service)?;

    let (service, output) = run_session_with(service, "rm income-1\nn\nrm income-1\n", false)?;

    assert_eq!(output.matches("Cancelled").count(), 2);
    assert!(service.ledger().get(EntryType::Income, 1).is_some());
    assert_eq!(service.ledger().len(), 4);
    Ok(())
}

#[test]
fn test_delete_with_assume_yes_skips_prompt() -> Result<()> {
    let mut service = test_service();
    StandardBudget::create(&mut service)?;

    let (service, output) = run_session_with(service, "delete income-0\n", true)?;

    assert!(!output.contains("[y/N]"));
    assert!(output.contains("Removed income-0"));
    assert_eq!(service.sum_by_type(EntryType::Income), 42050);
    Ok(())
}

#[test]
fn test_list_renders_both_types() -> Result<()> {
    let mut service = test_service();
    StandardBudget::create(&mut service)?;

    let (_, output) = run_session_with(service, "list\nlist expense\n", false)?;

    assert_eq!(output.matches("INCOME\n").count(), 1);
    assert_eq!(output.matches("EXPENSES\n").count(), 2);
    assert!(output.contains("+ 2,500.00"));
    assert!(output.contains("- 312.75"));
    Ok(())
}

#[test]
fn test_quit_stops_reading() -> Result<()> {
    let (service, _) = run_session("add income 5 Tip\nquit\nadd income 5 Tip\n", false)?;
    assert_eq!(service.ledger().len(), 1);
    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let (_, output) = run_session("help\n", false)?;
    assert!(output.contains("add <income|expense> <amount> <description>"));
    assert!(output.contains("export <csv|json> [path]"));
    Ok(())
}

#[test]
fn test_amounts_overflowing_the_total_are_rejected() -> Result<()> {
    let script = "add income 92233720368547758.07 Big\nadd income 1 Tip\ntotals\n";
    let (service, output) = run_session(script, false)?;

    assert!(output.contains("Error: Value is out of range"));
    assert_eq!(service.ledger().len(), 1);
    assert_eq!(service.sum_by_type(EntryType::Income), i64::MAX);
    assert!(output.contains("+ 92,233,720,368,547,758.07"));
    Ok(())
}
