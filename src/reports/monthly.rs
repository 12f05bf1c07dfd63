//! Income and expense totals for each calendar month

use serde::Serialize;

use crate::models::{Amount, Month, Transaction, TransactionKind};

/// Income and expense sums for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthTotal {
    pub month: Month,
    pub income: Amount,
    pub expense: Amount,
}

impl MonthTotal {
    fn empty(month: Month) -> Self {
        Self {
            month,
            income: Amount::zero(),
            expense: Amount::zero(),
        }
    }

    /// Income minus expense for the month
    pub fn net(&self) -> Amount {
        self.income - self.expense
    }
}

/// Totals for all twelve months, January first
///
/// Months without records report zero for both kinds; records of unknown
/// kinds are ignored.
pub fn group_by_month_total(items: &[Transaction]) -> Vec<MonthTotal> {
    let mut totals: Vec<MonthTotal> = Month::all().map(MonthTotal::empty).collect();
    for txn in items {
        let slot = &mut totals[txn.month.number() as usize - 1];
        match txn.kind {
            TransactionKind::Income => slot.income += txn.amount,
            TransactionKind::Expense => slot.expense += txn.amount,
            TransactionKind::Other(_) => {}
        }
    }
    totals
}
