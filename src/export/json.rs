//! JSON export of a ledger report
//!
//! The report is an output artifact only; there is no matching import.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;
use crate::reports::LedgerSnapshot;
use crate::services::LedgerStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger report: every transaction plus every derived view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerExport<'a> {
    pub schema_version: &'static str,
    pub exported_at: DateTime<Utc>,
    pub app_version: &'static str,
    pub combined_list: &'a [Transaction],
    #[serde(flatten)]
    pub snapshot: &'a LedgerSnapshot,
}

impl<'a> LedgerExport<'a> {
    /// Build a report from a ledger
    pub fn from_ledger(ledger: &'a LedgerStore) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            combined_list: ledger.combined_list(),
            snapshot: ledger.snapshot(),
        }
    }
}

/// Export the ledger report as pretty-printed JSON
pub fn export_ledger_json<W: Write>(ledger: &LedgerStore, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
