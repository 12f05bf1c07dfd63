//! List derivations: kind filters, month grouping, and view scoping
//!
//! Every function here is a pure function of its input slice and preserves
//! ledger order.

use std::collections::BTreeMap;

use crate::config::ViewScope;
use crate::models::{Month, Transaction, TransactionKind};

/// Transactions grouped by month, insertion order preserved inside each group
pub type MonthGroups = BTreeMap<Month, Vec<Transaction>>;

/// Records of the given kind, in ledger order
pub fn filter_by_kind(items: &[Transaction], kind: &TransactionKind) -> Vec<Transaction> {
    items.iter().filter(|t| &t.kind == kind).cloned().collect()
}

/// Group records by their month in a single pass
///
/// Months without records have no key.
pub fn group_by_month(items: &[Transaction]) -> MonthGroups {
    let mut groups = MonthGroups::new();
    for txn in items {
        groups.entry(txn.month).or_default().push(txn.clone());
    }
    groups
}

/// The records the scoped views are computed over
///
/// With `CurrentMonth` this is the current month's group (empty if the month
/// has no records yet); with `AllMonths` it is the whole ledger.
pub fn scoped_items(
    items: &[Transaction],
    groups: &MonthGroups,
    scope: ViewScope,
    current_month: Month,
) -> Vec<Transaction> {
    match scope {
        ViewScope::CurrentMonth => groups.get(&current_month).cloned().unwrap_or_default(),
        ViewScope::AllMonths => items.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionId, TransactionInput};

    fn txn(seq: u64, kind: &str, month: u32, amount: f64) -> Transaction {
        Transaction::from_input(
            seq,
            TransactionId::from(format!("id-{}", seq)),
            TransactionKind::parse(kind),
            &TransactionInput::new().amount(amount),
            Month::new(month).unwrap(),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(1, "income", 1, 100.0),
            txn(2, "expense", 2, 20.0),
            txn(3, "expense", 1, 30.0),
            txn(4, "transfer", 1, 5.0),
            txn(5, "income", 2, 70.0),
        ]
    }

    fn sequences(items: &[Transaction]) -> Vec<u64> {
        items.iter().map(|t| t.sequence).collect()
    }

    #[test]
    fn test_filter_by_kind_is_stable() {
        let items = sample();
        assert_eq!(
            sequences(&filter_by_kind(&items, &TransactionKind::Income)),
            vec![1, 5]
        );
        assert_eq!(
            sequences(&filter_by_kind(&items, &TransactionKind::Expense)),
            vec![2, 3]
        );
    }

    #[test]
    fn test_unknown_kind_only_matches_itself() {
        let items = sample();
        let other = filter_by_kind(&items, &TransactionKind::parse("transfer"));
        assert_eq!(sequences(&other), vec![4]);
    }

    #[test]
    fn test_group_by_month_partitions() {
        let items = sample();
        let groups = group_by_month(&items);

        assert_eq!(groups.len(), 2);
        assert_eq!(sequences(&groups[&Month::new(1).unwrap()]), vec![1, 3, 4]);
        assert_eq!(sequences(&groups[&Month::new(2).unwrap()]), vec![2, 5]);
        assert!(!groups.contains_key(&Month::new(3).unwrap()));

        let grouped: usize = groups.values().map(Vec::len).sum();
        assert_eq!(grouped, items.len());
    }

    #[test]
    fn test_scoped_items() {
        let items = sample();
        let groups = group_by_month(&items);
        let feb = Month::new(2).unwrap();
        let jun = Month::new(6).unwrap();

        let scoped = scoped_items(&items, &groups, ViewScope::CurrentMonth, feb);
        assert_eq!(sequences(&scoped), vec![2, 5]);

        let empty = scoped_items(&items, &groups, ViewScope::CurrentMonth, jun);
        assert!(empty.is_empty());

        let all = scoped_items(&items, &groups, ViewScope::AllMonths, jun);
        assert_eq!(all.len(), 5);
    }
}
