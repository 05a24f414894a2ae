use serde::{Deserialize, Serialize};

use super::Cents;

/// Identifier of an entry, unique only within its [`EntryType`].
pub type EntryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money coming in (salary, refunds, gifts)
    Income,
    /// Money going out (rent, groceries, bills)
    Expense,
}

impl EntryType {
    pub const ALL: [EntryType; 2] = [EntryType::Income, EntryType::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Income => "income",
            EntryType::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "inc" | "+" => Some(EntryType::Income),
            "expense" | "exp" | "-" => Some(EntryType::Expense),
            _ => None,
        }
    }

    /// Sign shown in front of amounts of this type.
    pub fn sign(&self) -> &'static str {
        match self {
            EntryType::Income => "+",
            EntryType::Expense => "-",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single income or expense record.
/// Entries are created by the ledger, which assigns the id, and are never
/// modified afterwards: a wrong entry is removed and entered again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub id: EntryId,
    pub description: String,
    /// Always non-negative; the type carries the direction
    pub value: Cents,
}

impl Entry {
    pub(crate) fn new(
        entry_type: EntryType,
        id: EntryId,
        description: String,
        value: Cents,
    ) -> Self {
        Self {
            entry_type,
            id,
            description,
            value,
        }
    }

    pub fn key(&self) -> EntryKey {
        EntryKey::new(self.entry_type, self.id)
    }
}

/// Textual handle for one entry, rendered as `<type>-<id>` (e.g. `income-3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub entry_type: EntryType,
    pub id: EntryId,
}

impl EntryKey {
    pub fn new(entry_type: EntryType, id: EntryId) -> Self {
        Self { entry_type, id }
    }

    /// Parse a key of the form `income-3` or `expense-0`.
    pub fn parse(s: &str) -> Option<Self> {
        let (type_str, id_str) = s.trim().rsplit_once('-')?;
        // Only the rendered names, no input aliases
        let entry_type = EntryType::ALL
            .into_iter()
            .find(|t| t.as_str() == type_str)?;
        let id = id_str.parse().ok()?;
        Some(Self::new(entry_type, id))
    }
}

impl std::fmt::Display for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.entry_type, self.id)
    }
}
