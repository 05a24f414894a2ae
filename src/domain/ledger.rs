use serde::{Deserialize, Serialize};

use super::{Cents, Entry, EntryId, EntryKey, EntryType};

/// Sum of the values of all entries of the given type.
pub fn sum_by_type(entries: &[Entry], entry_type: EntryType) -> Cents {
    entries
        .iter()
        .filter(|e| e.entry_type == entry_type)
        .map(|e| e.value)
        .sum()
}

/// Next id for an entry of the given type: one past the highest id currently
/// in use for that type, or 0 when there is none.
/// Ids freed by removing the newest entry are handed out again.
pub fn next_id(entries: &[Entry], entry_type: EntryType) -> EntryId {
    entries
        .iter()
        .filter(|e| e.entry_type == entry_type)
        .map(|e| e.id + 1)
        .max()
        .unwrap_or(0)
}

/// Compute income, expense and balance in a single pass.
pub fn compute_totals(entries: &[Entry]) -> Totals {
    let (income, expense) = entries
        .iter()
        .fold((0, 0), |(income, expense), entry| match entry.entry_type {
            EntryType::Income => (income + entry.value, expense),
            EntryType::Expense => (income, expense + entry.value),
        });

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Snapshot of the derived figures shown after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub income: Cents,
    pub expense: Cents,
    /// income - expense
    pub balance: Cents,
}

impl Totals {
    pub fn for_type(&self, entry_type: EntryType) -> Cents {
        match entry_type {
            EntryType::Income => self.income,
            EntryType::Expense => self.expense,
        }
    }
}

/// Ordered, in-memory collection of income and expense entries.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new entry and return it.
    ///
    /// The description is trimmed and must not be empty. The value is stored
    /// as its absolute amount, must not be zero and must keep the running
    /// total of its type within range.
    pub fn add(
        &mut self,
        entry_type: EntryType,
        description: &str,
        value: Cents,
    ) -> Result<Entry, LedgerError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(LedgerError::EmptyDescription);
        }
        if value == 0 {
            return Err(LedgerError::ZeroValue);
        }
        let value = value.checked_abs().ok_or(LedgerError::ValueOutOfRange)?;
        // Per-type sums must stay representable; balance then cannot overflow
        sum_by_type(&self.entries, entry_type)
            .checked_add(value)
            .ok_or(LedgerError::ValueOutOfRange)?;

        let entry = Entry::new(
            entry_type,
            next_id(&self.entries, entry_type),
            description.to_string(),
            value,
        );
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Remove the entry with the given type and id, returning it.
    /// The ledger is left untouched when no such entry exists.
    pub fn remove(&mut self, entry_type: EntryType, id: EntryId) -> Result<Entry, LedgerError> {
        let position = self
            .entries
            .iter()
            .position(|e| e.entry_type == entry_type && e.id == id)
            .ok_or(LedgerError::EntryNotFound(EntryKey::new(entry_type, id)))?;
        Ok(self.entries.remove(position))
    }

    pub fn get(&self, entry_type: EntryType, id: EntryId) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.entry_type == entry_type && e.id == id)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries of one type in insertion order.
    pub fn entries_of(&self, entry_type: EntryType) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(move |e| e.entry_type == entry_type)
    }

    pub fn sum_by_type(&self, entry_type: EntryType) -> Cents {
        sum_by_type(&self.entries, entry_type)
    }

    pub fn balance(&self) -> Cents {
        self.sum_by_type(EntryType::Income) - self.sum_by_type(EntryType::Expense)
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    EmptyDescription,
    ZeroValue,
    ValueOutOfRange,
    EntryNotFound(EntryKey),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::EmptyDescription => write!(f, "Description must not be empty"),
            LedgerError::ZeroValue => write!(f, "Value must not be zero"),
            LedgerError::ValueOutOfRange => write!(f, "Value is out of range"),
            LedgerError::EntryNotFound(key) => write!(f, "Entry not found: {}", key),
        }
    }
}

impl std::error::Error for LedgerError {}
