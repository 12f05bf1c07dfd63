//! Audit journal for ledger actions
//!
//! - `AuditEntry`: one action call with timestamp, target and whether it
//!   changed state.
//! - `AuditLogger`: appends entries to a line-delimited JSON file and reads
//!   them back.
//!
//! `LedgerStore` records an entry for every action into its in-memory trail;
//! the binary flushes that trail through an `AuditLogger` on request.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
