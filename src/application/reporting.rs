use serde::{Deserialize, Serialize};

use crate::domain::{Cents, Totals};

/// Figures shown at the top of the budget: the month title and the totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Display label, e.g. "October 2026"
    pub month: String,
    pub total_income: Cents,
    pub total_expense: Cents,
    pub balance: Cents,
    pub income_count: usize,
    pub expense_count: usize,
}

impl BudgetSummary {
    pub fn totals(&self) -> Totals {
        Totals {
            income: self.total_income,
            expense: self.total_expense,
            balance: self.balance,
        }
    }
}
