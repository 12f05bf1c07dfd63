use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use pocket_ledger::cli::{
    flush_audit_trail, handle_audit_command, handle_categories_command, handle_export_command,
    handle_months_command, handle_summary_command, load_ledger, ExportFormat, KindArg, LedgerArgs,
};
use pocket_ledger::config::{LedgerPaths, Settings};
use pocket_ledger::services::LedgerStore;
use pocket_ledger::{LedgerError, LedgerResult};

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Income and expense ledger with monthly and category views",
    long_about = "pocket replays a batch of income and expense entries into an \
                  in-memory ledger and prints totals, category breakdowns and \
                  per-month summaries, or exports them as JSON, YAML or CSV."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings directory (defaults to $POCKET_LEDGER_DIR or the XDG config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Append the ledger's audit journal to the audit log in the config directory
    #[arg(long, global = true)]
    audit: bool,

    /// Audit log to append to (implies --audit) or to read with `audit`
    #[arg(long, global = true)]
    audit_log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals, transaction lists and category breakdowns
    Summary {
        #[command(flatten)]
        ledger: LedgerArgs,
    },

    /// Show income and expense for each of the twelve months
    Months {
        #[command(flatten)]
        ledger: LedgerArgs,
    },

    /// Show category totals for income or expense
    #[command(alias = "cat")]
    Categories {
        #[command(flatten)]
        ledger: LedgerArgs,
        /// Transaction kind to break down
        #[arg(short, long, value_enum, default_value = "expense")]
        kind: KindArg,
    },

    /// Export the ledger report
    Export {
        #[command(flatten)]
        ledger: LedgerArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the audit log written by --audit / --audit-log
    Audit {
        /// Only show the most recent entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to disk
        #[arg(long)]
        init: bool,
    },
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Settings for report commands; an unresolvable config directory means defaults
fn report_settings(paths: &LedgerResult<LedgerPaths>) -> LedgerResult<Settings> {
    match paths {
        Ok(paths) => Settings::load_or_create(paths),
        Err(e) => {
            warn!(error = %e, "config directory unavailable, using default settings");
            Ok(Settings::default())
        }
    }
}

fn resolved(paths: &LedgerResult<LedgerPaths>) -> LedgerResult<&LedgerPaths> {
    paths.as_ref().map_err(LedgerError::clone)
}

/// Where the audit journal goes: the explicit path, else the default log if requested
fn audit_destination(
    cli_path: Option<PathBuf>,
    enabled: bool,
    paths: &LedgerResult<LedgerPaths>,
) -> LedgerResult<Option<PathBuf>> {
    if cli_path.is_some() {
        return Ok(cli_path);
    }
    if !enabled {
        return Ok(None);
    }
    let paths = resolved(paths)?;
    paths.ensure_directories()?;
    Ok(Some(paths.audit_log()))
}

fn run_report<F>(
    args: &LedgerArgs,
    settings: &Settings,
    audit_log: Option<&Path>,
    render: F,
) -> LedgerResult<()>
where
    F: FnOnce(&LedgerStore) -> LedgerResult<()>,
{
    let mut ledger = load_ledger(args, settings)?;
    render(&ledger)?;
    flush_audit_trail(&mut ledger, audit_log)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.config_dir {
        Some(dir) => Ok(LedgerPaths::with_base_dir(dir)),
        None => LedgerPaths::new(),
    };

    if let Commands::Audit { limit } = cli.command {
        let log_path = match cli.audit_log {
            Some(path) => path,
            None => resolved(&paths)?.audit_log(),
        };
        handle_audit_command(&log_path, limit)?;
        return Ok(());
    }

    if let Commands::Config { init } = cli.command {
        show_config(resolved(&paths)?, init)?;
        return Ok(());
    }

    let settings = report_settings(&paths)?;
    let audit_log = audit_destination(cli.audit_log, cli.audit, &paths)?;
    let audit_log = audit_log.as_deref();

    match cli.command {
        Commands::Summary { ledger } => {
            run_report(&ledger, &settings, audit_log, handle_summary_command)?;
        }
        Commands::Months { ledger } => {
            run_report(&ledger, &settings, audit_log, handle_months_command)?;
        }
        Commands::Categories { ledger, kind } => {
            run_report(&ledger, &settings, audit_log, |store| {
                handle_categories_command(store, kind)
            })?;
        }
        Commands::Export {
            ledger,
            format,
            output,
        } => {
            run_report(&ledger, &settings, audit_log, |store| {
                handle_export_command(store, format, output)
            })?;
        }
        Commands::Audit { .. } | Commands::Config { .. } => {}
    }

    Ok(())
}

fn show_config(paths: &LedgerPaths, init: bool) -> LedgerResult<()> {
    let settings = Settings::load_or_create(paths)?;
    if init {
        settings.save(paths)?;
        println!("Settings written to: {}", paths.settings_file().display());
        println!();
    }

    println!("pocket configuration");
    println!("====================");
    println!("Config directory: {}", paths.base_dir().display());
    println!(
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not written, using defaults)" }
    );
    println!("Audit log:        {} (written with --audit)", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Amount policy:  {:?}", settings.amount_policy);
    println!("  View scope:     {:?}", settings.view_scope);
    println!("  Decimal places: {}", settings.decimal_places);
    Ok(())
}
