//! Core data models for pocket-ledger
//!
//! This module contains the data structures of the ledger domain:
//! transactions, their ids and amounts, calendar months, and the fixed
//! display palette.

pub mod amount;
pub mod ids;
pub mod month;
pub mod palette;
pub mod transaction;

pub use amount::Amount;
pub use ids::TransactionId;
pub use month::{Month, MONTH_NAMES};
pub use palette::{color_for, CATEGORY_PALETTE};
pub use transaction::{LedgerEntry, Transaction, TransactionInput, TransactionKind};
