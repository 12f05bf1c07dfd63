//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger: every report command reads
//! a batch of entries, replays it into a fresh `LedgerStore` and renders a
//! view of the result.

pub mod audit;
pub mod export;
pub mod report;

pub use audit::{format_audit_log, handle_audit_command};
pub use export::{handle_export_command, ExportFormat};
pub use report::{handle_categories_command, handle_months_command, handle_summary_command, KindArg};

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::audit::AuditLogger;
use crate::config::{AmountPolicy, Settings, ViewScope};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{LedgerEntry, Month};
use crate::services::LedgerStore;

/// Arguments shared by every command that builds a ledger
#[derive(Args, Debug, Clone)]
pub struct LedgerArgs {
    /// Transaction batch (JSON array, or YAML with a .yaml/.yml extension)
    pub file: PathBuf,

    /// Current month (number or name); defaults to today's month
    #[arg(short, long)]
    pub month: Option<Month>,

    /// Which transactions lists and totals cover
    #[arg(short, long, value_enum)]
    pub scope: Option<ViewScope>,

    /// How amounts that are not numbers are handled
    #[arg(long, value_enum)]
    pub policy: Option<AmountPolicy>,
}

/// Read a batch of ledger entries from a JSON or YAML file
pub fn read_entries(path: &Path) -> LedgerResult<Vec<LedgerEntry>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        LedgerError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        serde_yaml::from_str(&contents).map_err(|e| {
            LedgerError::Import(format!("Failed to parse {}: {}", path.display(), e))
        })
    } else {
        serde_json::from_str(&contents).map_err(|e| {
            LedgerError::Import(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

/// Build a ledger from command arguments and settings
///
/// The month pointer is set before the batch is replayed, so entries without
/// an explicit month land in that month.
pub fn load_ledger(args: &LedgerArgs, settings: &Settings) -> LedgerResult<LedgerStore> {
    let mut settings = settings.clone();
    if let Some(scope) = args.scope {
        settings.view_scope = scope;
    }
    if let Some(policy) = args.policy {
        settings.amount_policy = policy;
    }

    let mut ledger = LedgerStore::with_settings(settings);
    if let Some(month) = args.month {
        ledger.set_current_month(month);
    }

    let entries = read_entries(&args.file)?;
    let added = ledger.replay(entries)?;
    info!(added, file = %args.file.display(), "ledger loaded");

    Ok(ledger)
}

/// Append the ledger's audit journal to a log file, if one was requested
pub fn flush_audit_trail(ledger: &mut LedgerStore, audit_log: Option<&Path>) -> LedgerResult<()> {
    if let Some(path) = audit_log {
        let entries = ledger.take_audit_trail();
        AuditLogger::new(path.to_path_buf()).log_batch(&entries)?;
        info!(count = entries.len(), path = %path.display(), "audit trail written");
    }
    Ok(())
}
