use thiserror::Error;

use crate::domain::{LedgerError, ParseCentsError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid entry type: '{0}' (expected income or expense)")]
    InvalidEntryType(String),

    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount {
        input: String,
        reason: ParseCentsError,
    },

    #[error("Amount is required")]
    MissingAmount,

    #[error("Invalid entry reference: '{0}' (expected <type>-<id>, e.g. income-0)")]
    InvalidEntryKey(String),

    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("Export failed: {0}")]
    Export(#[from] anyhow::Error),
}
