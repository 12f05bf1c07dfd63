//! Property-based tests for ledger invariants
//!
//! These tests use proptest to verify that every derived view agrees with
//! the combined list:
//! - Append-only growth with distinct ids
//! - Net balance equals income minus expense
//! - Kind lists partition the known-kind records
//! - Category labels are unique and their amounts are per-label sums
//! - Month groups partition the ledger

use std::collections::HashSet;

use pocket_ledger::config::{Settings, ViewScope};
use pocket_ledger::models::{Month, TransactionInput, TransactionKind};
use pocket_ledger::LedgerStore;
use proptest::prelude::*;

/// One generated `add_item` call: (kind, whole amount, category, month)
type Call = (String, i64, Option<String>, u32);

/// Strategy for transaction kinds, mostly known with an occasional stray
fn kind_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => Just("income".to_string()),
        4 => Just("expense".to_string()),
        1 => Just("transfer".to_string()),
    ]
}

/// Strategy for category labels, drawn from a small pool so labels repeat
fn category_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Food".to_string())),
        Just(Some("Rent".to_string())),
        Just(Some("Salary".to_string())),
        Just(Some("Gift".to_string())),
    ]
}

/// Integer amounts keep float sums exact
fn call_strategy() -> impl Strategy<Value = Call> {
    (kind_strategy(), -10_000i64..10_000i64, category_strategy(), 1u32..=12u32)
}

fn build_ledger(calls: &[Call], scope: ViewScope) -> LedgerStore {
    let settings = Settings {
        view_scope: scope,
        ..Settings::default()
    };
    let mut ledger = LedgerStore::with_settings(settings).starting_at(Month::JANUARY);

    for (kind, amount, category, month) in calls {
        let mut input = TransactionInput::new()
            .amount(*amount)
            .month(Month::new(*month).unwrap());
        if let Some(category) = category {
            input = input.category(category.clone());
        }
        ledger.add_item(input, kind.as_str()).unwrap();
    }
    ledger
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_append_only_with_distinct_ids(calls in prop::collection::vec(call_strategy(), 0..40)) {
        let ledger = build_ledger(&calls, ViewScope::AllMonths);

        prop_assert_eq!(ledger.len(), calls.len());

        let ids: HashSet<_> = ledger.combined_list().iter().map(|t| t.id.clone()).collect();
        prop_assert_eq!(ids.len(), calls.len());

        for (index, txn) in ledger.combined_list().iter().enumerate() {
            prop_assert_eq!(txn.sequence, index as u64 + 1);
        }
    }

    #[test]
    fn prop_net_balance_is_income_minus_expense(
        calls in prop::collection::vec(call_strategy(), 0..40),
        all_months in any::<bool>(),
    ) {
        let scope = if all_months { ViewScope::AllMonths } else { ViewScope::CurrentMonth };
        let ledger = build_ledger(&calls, scope);

        let expected = ledger.total_income().value() - ledger.total_expense().value();
        prop_assert_eq!(ledger.net_balance().value(), expected);
    }

    #[test]
    fn prop_kind_lists_partition_known_records(calls in prop::collection::vec(call_strategy(), 0..40)) {
        let ledger = build_ledger(&calls, ViewScope::AllMonths);

        let known = ledger.combined_list().iter().filter(|t| t.kind.is_known()).count();
        prop_assert_eq!(ledger.income_list().len() + ledger.expense_list().len(), known);
        prop_assert!(ledger.income_list().iter().all(|t| t.is_income()));
        prop_assert!(ledger.expense_list().iter().all(|t| t.is_expense()));

        let income: i64 = calls.iter().filter(|c| c.0 == "income").map(|c| c.1).sum();
        prop_assert_eq!(ledger.total_income().value(), income as f64);
    }

    #[test]
    fn prop_category_views_agree(calls in prop::collection::vec(call_strategy(), 0..40)) {
        let ledger = build_ledger(&calls, ViewScope::AllMonths);

        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            let labels = ledger.extract_categories(&kind);
            let amounts = ledger.calculate_category_amounts(&kind);
            prop_assert_eq!(labels.len(), amounts.len());

            let unique: HashSet<_> = labels.iter().collect();
            prop_assert_eq!(unique.len(), labels.len());

            for (label, amount) in labels.iter().zip(&amounts) {
                let carrying: Vec<&Call> = calls
                    .iter()
                    .filter(|c| c.0 == kind.as_str() && c.2.as_deref() == Some(label.as_str()))
                    .collect();
                prop_assert!(!carrying.is_empty());

                let expected: i64 = carrying.iter().map(|c| c.1).sum();
                prop_assert_eq!(amount.value(), expected as f64);
            }
        }
    }

    #[test]
    fn prop_month_groups_partition_ledger(calls in prop::collection::vec(call_strategy(), 0..40)) {
        let ledger = build_ledger(&calls, ViewScope::CurrentMonth);

        let grouped: usize = ledger.group_by_month_data().values().map(Vec::len).sum();
        prop_assert_eq!(grouped, ledger.len());

        for (month, items) in ledger.group_by_month_data() {
            prop_assert!(!items.is_empty());
            prop_assert!(items.iter().all(|t| t.month == *month));
        }

        prop_assert_eq!(ledger.group_by_month_total().len(), 12);
        let month_income: f64 = ledger.group_by_month_total().iter().map(|m| m.income.value()).sum();
        let income: i64 = calls.iter().filter(|c| c.0 == "income").map(|c| c.1).sum();
        prop_assert_eq!(month_income, income as f64);
    }
}
