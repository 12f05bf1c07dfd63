//! YAML export of a ledger report

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::services::LedgerStore;

/// Export the ledger report as YAML with a short header comment
pub fn export_ledger_yaml<W: Write>(ledger: &LedgerStore, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    writeln!(writer, "# pocket-ledger report")
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
