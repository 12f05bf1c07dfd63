//! Immutable snapshot of every derived view of a ledger
//!
//! A snapshot is computed in one go from the ledger contents, the
//! current-month pointer and the view scope. `LedgerStore` memoizes it until
//! the next mutation, so readers never observe a stale aggregate.

use serde::Serialize;

use super::categories::{category_breakdown, CategoryAmount};
use super::filters::{filter_by_kind, group_by_month, scoped_items, MonthGroups};
use super::monthly::{group_by_month_total, MonthTotal};
use super::totals::Totals;
use crate::config::ViewScope;
use crate::models::{Amount, Month, Transaction, TransactionKind};

/// All derived views of a ledger at one point in time
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub current_month: Month,
    pub scope: ViewScope,
    /// Scoped income records
    pub income_list: Vec<Transaction>,
    /// Scoped expense records
    pub expense_list: Vec<Transaction>,
    /// Whole-ledger grouping by month
    #[serde(skip)]
    pub group_by_month_data: MonthGroups,
    #[serde(flatten)]
    pub totals: Totals,
    pub income_categories: Vec<CategoryAmount>,
    pub expense_categories: Vec<CategoryAmount>,
    pub group_by_month_total: Vec<MonthTotal>,
}

impl LedgerSnapshot {
    /// Derive every view from the ledger contents
    pub fn compute(items: &[Transaction], current_month: Month, scope: ViewScope) -> Self {
        let group_by_month_data = group_by_month(items);
        let scoped = scoped_items(items, &group_by_month_data, scope, current_month);

        let income_list = filter_by_kind(&scoped, &TransactionKind::Income);
        let expense_list = filter_by_kind(&scoped, &TransactionKind::Expense);
        let totals = Totals::from_lists(&income_list, &expense_list);

        Self {
            current_month,
            scope,
            income_categories: category_breakdown(&income_list, &TransactionKind::Income),
            expense_categories: category_breakdown(&expense_list, &TransactionKind::Expense),
            income_list,
            expense_list,
            group_by_month_data,
            totals,
            group_by_month_total: group_by_month_total(items),
        }
    }

    pub fn total_income(&self) -> Amount {
        self.totals.total_income
    }

    pub fn total_expense(&self) -> Amount {
        self.totals.total_expense
    }

    pub fn net_balance(&self) -> Amount {
        self.totals.net_balance
    }

    /// Labeled category rows for one kind (empty for unknown kinds)
    pub fn categories_for(&self, kind: &TransactionKind) -> &[CategoryAmount] {
        match kind {
            TransactionKind::Income => &self.income_categories,
            TransactionKind::Expense => &self.expense_categories,
            TransactionKind::Other(_) => &[],
        }
    }

    /// Category labels for one kind, first-seen order
    pub fn category_labels(&self, kind: &TransactionKind) -> Vec<String> {
        self.categories_for(kind)
            .iter()
            .map(|row| row.category.clone())
            .collect()
    }

    /// Category sums for one kind, aligned with [`Self::category_labels`]
    pub fn category_amounts(&self, kind: &TransactionKind) -> Vec<Amount> {
        self.categories_for(kind).iter().map(|row| row.amount).collect()
    }

    /// Records of one month (empty if the month has none)
    pub fn month_items(&self, month: Month) -> &[Transaction] {
        self.group_by_month_data
            .get(&month)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Totals of one month
    pub fn month_total(&self, month: Month) -> MonthTotal {
        self.group_by_month_total[month.number() as usize - 1]
    }
}
