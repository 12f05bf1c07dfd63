//! pocket-ledger - in-memory income and expense ledger
//!
//! This library holds an append-only list of income and expense
//! transactions together with a current-month pointer, and derives every
//! view (kind lists, totals, category aggregates, month groupings) from that
//! state on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, amounts, months)
//! - `reports`: Pure derivations over a transaction slice
//! - `services`: The `LedgerStore` and its actions
//! - `audit`: Journal of ledger actions
//! - `display`: Terminal renderings
//! - `export`: JSON, YAML and CSV output
//! - `cli`: Command handlers for the `pocket` binary
//!
//! # Example
//!
//! ```rust
//! use pocket_ledger::models::{Month, TransactionInput};
//! use pocket_ledger::LedgerStore;
//!
//! let mut ledger = LedgerStore::new().starting_at(Month::new(3).unwrap());
//! ledger.add_item(TransactionInput::new().amount(100).category("Salary"), "income")?;
//! ledger.add_item(TransactionInput::new().amount(30).category("Food"), "expense")?;
//!
//! assert_eq!(ledger.net_balance().value(), 70.0);
//! assert_eq!(ledger.expense_categories(), vec!["Food".to_string()]);
//! # Ok::<(), pocket_ledger::LedgerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{LedgerError, LedgerResult};
pub use services::LedgerStore;
