//! Service layer for pocket-ledger
//!
//! `LedgerStore` is the single stateful component: it owns the transactions,
//! runs the actions and serves the derived views.

pub mod ledger;

pub use ledger::LedgerStore;
