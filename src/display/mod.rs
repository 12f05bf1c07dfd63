//! Display formatting for terminal output
//!
//! Plain-text renderings of ledger snapshots for the `pocket` binary.

pub mod report;
pub mod summary;

pub use summary::{
    format_category_rows, format_month_totals, format_summary, format_transaction_row,
};
