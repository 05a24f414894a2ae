// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use budgetbook::application::BudgetService;
use budgetbook::cli::Session;
use chrono::NaiveDate;
use std::io::Cursor;

/// Helper to create an empty budget titled October 2026
pub fn test_service() -> BudgetService {
    BudgetService::new(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap())
}

/// Run a scripted session and return the final service plus everything written
pub fn run_session(script: &str, assume_yes: bool) -> Result<(BudgetService, String)> {
    run_session_with(test_service(), script, assume_yes)
}

/// Run a scripted session against an existing service
pub fn run_session_with(
    service: BudgetService,
    script: &str,
    assume_yes: bool,
) -> Result<(BudgetService, String)> {
    let mut output = Vec::new();
    let mut session =
        Session::new(service, Cursor::new(script.as_bytes()), &mut output).assume_yes(assume_yes);
    session.run()?;
    let service = session.into_service();
    Ok((service, String::from_utf8(output)?))
}

/// Test fixture: a typical month
pub struct StandardBudget;

impl StandardBudget {
    /// Salary and a side job as income, rent and groceries as expenses
    pub fn create(service: &mut BudgetService) -> Result<()> {
        service.record_entry("income", "Salary", "2500")?;
        service.record_entry("income", "Freelance", "420.50")?;
        service.record_entry("expense", "Rent", "900")?;
        service.record_entry("expense", "Groceries", "312.75")?;
        Ok(())
    }
}
