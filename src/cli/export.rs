//! CLI command for report export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{
    export_ledger_json, export_ledger_yaml, export_month_totals_csv, export_transactions_csv,
};
use crate::services::LedgerStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full report as JSON
    Json,
    /// Full report as YAML
    Yaml,
    /// Transactions as CSV
    Csv,
    /// Twelve month totals as CSV
    MonthsCsv,
}

/// Write the ledger report to a file, or to stdout when no path is given
pub fn handle_export_command(
    ledger: &LedgerStore,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_report(ledger, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;
            eprintln!("Report exported to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_report(ledger, format, &mut writer)?;
        }
    }
    Ok(())
}

fn write_report<W: Write>(
    ledger: &LedgerStore,
    format: ExportFormat,
    writer: &mut W,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Json => export_ledger_json(ledger, writer),
        ExportFormat::Yaml => export_ledger_yaml(ledger, writer),
        ExportFormat::Csv => export_transactions_csv(ledger, writer),
        ExportFormat::MonthsCsv => export_month_totals_csv(ledger.group_by_month_total(), writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionInput;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");

        let mut ledger = LedgerStore::new();
        ledger
            .add_item(TransactionInput::new().amount(3), "expense")
            .unwrap();

        handle_export_command(&ledger, ExportFormat::Csv, Some(path.clone())).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.starts_with("Sequence,ID,Type"));
    }
}
