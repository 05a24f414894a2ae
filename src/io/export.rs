use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::BudgetService;
use crate::domain::{format_cents, Entry, Totals};

/// Snapshot of the current session for JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub month: String,
    pub entries: Vec<Entry>,
    pub totals: Totals,
}

/// Exporter for rendering the in-memory budget to various formats
pub struct Exporter<'a> {
    service: &'a BudgetService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a BudgetService) -> Self {
        Self { service }
    }

    /// Export entries to CSV format, in ledger order
    pub fn export_entries_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let entries = self.service.list_entries(None);
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["type", "id", "description", "value"])?;

        for entry in &entries {
            let id = entry.id.to_string();
            let value = format_cents(entry.value);
            csv_writer.write_record([
                entry.entry_type.as_str(),
                id.as_str(),
                entry.description.as_str(),
                value.as_str(),
            ])?;
        }

        csv_writer.flush()?;
        tracing::info!("exported {} entries as csv", entries.len());
        Ok(entries.len())
    }

    /// Export entries and totals as a pretty-printed JSON snapshot
    pub fn export_snapshot_json<W: Write>(&self, mut writer: W) -> Result<SessionSnapshot> {
        let snapshot = SessionSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            month: self.service.month_label(),
            entries: self.service.ledger().entries().to_vec(),
            totals: self.service.totals(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::info!("exported snapshot with {} entries", snapshot.entries.len());
        Ok(snapshot)
    }
}

/// Output format accepted by the `export` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}
