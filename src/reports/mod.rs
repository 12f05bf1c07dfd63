//! Derived views over the ledger
//!
//! Pure functions from a transaction slice to lists, totals, category
//! breakdowns and month groupings, plus the `LedgerSnapshot` that bundles
//! them.

pub mod categories;
pub mod filters;
pub mod monthly;
pub mod snapshot;
pub mod totals;

pub use categories::{
    calculate_category_amounts, category_breakdown, extract_categories, CategoryAmount,
};
pub use filters::{filter_by_kind, group_by_month, scoped_items, MonthGroups};
pub use monthly::{group_by_month_total, MonthTotal};
pub use snapshot::LedgerSnapshot;
pub use totals::{sum_amounts, Totals};
