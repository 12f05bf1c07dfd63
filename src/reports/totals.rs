//! Income, expense and net balance totals

use serde::Serialize;

use crate::models::{Amount, Transaction};

/// Sum of amounts in list order (NaN propagates)
pub fn sum_amounts(items: &[Transaction]) -> Amount {
    items.iter().map(|t| t.amount).sum()
}

/// Totals over the scoped income and expense lists
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_income: Amount,
    pub total_expense: Amount,
    pub net_balance: Amount,
}

impl Totals {
    /// Compute totals from already filtered lists
    pub fn from_lists(income: &[Transaction], expense: &[Transaction]) -> Self {
        let total_income = sum_amounts(income);
        let total_expense = sum_amounts(expense);
        Self {
            total_income,
            total_expense,
            net_balance: total_income - total_expense,
        }
    }
}
