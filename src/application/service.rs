use chrono::{Datelike, Local, NaiveDate};

use crate::domain::{
    parse_cents, Cents, Entry, EntryId, EntryKey, EntryType, Ledger, LedgerError,
    ParseCentsError, Totals,
};

use super::{AppError, BudgetSummary};

/// Application service providing high-level operations on the budget.
/// This is the primary interface for any presentation layer (terminal
/// session, tests, exports). It owns the ledger for its whole lifetime.
pub struct BudgetService {
    ledger: Ledger,
    month: NaiveDate,
}

impl BudgetService {
    /// Create an empty budget for the month containing `month`.
    pub fn new(month: NaiveDate) -> Self {
        let month = month.with_day(1).unwrap_or(month);
        Self {
            ledger: Ledger::new(),
            month,
        }
    }

    /// Create an empty budget for the current local month.
    pub fn for_current_month() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// First day of the month this budget is titled with.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Month title, e.g. "October 2026".
    pub fn month_label(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    // ========================
    // Entry operations
    // ========================

    /// Record a new entry from already-typed values.
    pub fn add_entry(
        &mut self,
        entry_type: EntryType,
        description: &str,
        value: Cents,
    ) -> Result<Entry, AppError> {
        match self.ledger.add(entry_type, description, value) {
            Ok(entry) => {
                tracing::debug!(
                    key = %entry.key(),
                    value = entry.value,
                    "recorded entry"
                );
                Ok(entry)
            }
            Err(err) => {
                tracing::warn!("rejected {} entry: {}", entry_type, err);
                Err(err.into())
            }
        }
    }

    /// Record a new entry from raw text input as typed by the user.
    pub fn record_entry(
        &mut self,
        type_input: &str,
        description: &str,
        amount_input: &str,
    ) -> Result<Entry, AppError> {
        let entry_type = parse_entry_type(type_input)?;
        // Same order as the ledger: type, description, then value
        if description.trim().is_empty() {
            return Err(LedgerError::EmptyDescription.into());
        }
        let value = parse_amount(amount_input)?;
        self.add_entry(entry_type, description, value)
    }

    /// Remove an entry, returning it.
    pub fn remove_entry(&mut self, entry_type: EntryType, id: EntryId) -> Result<Entry, AppError> {
        match self.ledger.remove(entry_type, id) {
            Ok(entry) => {
                tracing::debug!(key = %entry.key(), "removed entry");
                Ok(entry)
            }
            Err(err) => {
                tracing::warn!("{}", err);
                Err(err.into())
            }
        }
    }

    /// Remove an entry addressed by its `<type>-<id>` key.
    pub fn remove_by_key(&mut self, key_input: &str) -> Result<Entry, AppError> {
        let key = parse_entry_key(key_input)?;
        self.remove_entry(key.entry_type, key.id)
    }

    /// Look up an entry by its `<type>-<id>` key without changing anything.
    pub fn find_by_key(&self, key_input: &str) -> Result<&Entry, AppError> {
        let key = parse_entry_key(key_input)?;
        self.ledger
            .get(key.entry_type, key.id)
            .ok_or_else(|| LedgerError::EntryNotFound(key).into())
    }

    /// List entries in insertion order, optionally of a single type.
    pub fn list_entries(&self, entry_type: Option<EntryType>) -> Vec<&Entry> {
        match entry_type {
            Some(t) => self.ledger.entries_of(t).collect(),
            None => self.ledger.entries().iter().collect(),
        }
    }

    // ========================
    // Totals
    // ========================

    pub fn sum_by_type(&self, entry_type: EntryType) -> Cents {
        self.ledger.sum_by_type(entry_type)
    }

    pub fn balance(&self) -> Cents {
        self.ledger.balance()
    }

    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    /// Everything the budget header displays.
    pub fn summary(&self) -> BudgetSummary {
        let totals = self.totals();
        BudgetSummary {
            month: self.month_label(),
            total_income: totals.income,
            total_expense: totals.expense,
            balance: totals.balance,
            income_count: self.ledger.entries_of(EntryType::Income).count(),
            expense_count: self.ledger.entries_of(EntryType::Expense).count(),
        }
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::for_current_month()
    }
}

/// Parse an entry type as entered by the user.
pub fn parse_entry_type(input: &str) -> Result<EntryType, AppError> {
    EntryType::from_str(input).ok_or_else(|| AppError::InvalidEntryType(input.trim().to_string()))
}

/// Parse an amount as entered by the user. An empty field counts as absent.
pub fn parse_amount(input: &str) -> Result<Cents, AppError> {
    match parse_cents(input) {
        Ok(cents) => Ok(cents),
        Err(ParseCentsError::Empty) => Err(AppError::MissingAmount),
        Err(reason) => Err(AppError::InvalidAmount {
            input: input.trim().to_string(),
            reason,
        }),
    }
}

/// Parse an entry key such as `expense-2`.
pub fn parse_entry_key(input: &str) -> Result<EntryKey, AppError> {
    EntryKey::parse(input).ok_or_else(|| AppError::InvalidEntryKey(input.trim().to_string()))
}
