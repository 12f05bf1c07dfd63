//! Export module for pocket-ledger
//!
//! Renders a ledger report in several formats:
//! - CSV: transactions and month totals (spreadsheet-compatible)
//! - JSON: the full report, machine-readable
//! - YAML: the full report, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_month_totals_csv, export_transactions_csv};
pub use json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;
