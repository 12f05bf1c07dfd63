//! Category extraction and per-category amounts
//!
//! Multi-category transactions count their full amount toward every label
//! they carry; amounts are never split.

use serde::Serialize;

use crate::models::{color_for, Amount, Transaction, TransactionKind};

/// Distinct category labels among records of `kind`, in first-seen order
pub fn extract_categories(items: &[Transaction], kind: &TransactionKind) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for txn in items.iter().filter(|t| &t.kind == kind) {
        for label in &txn.categories {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
    }
    labels
}

/// Per-category sums, positionally aligned with [`extract_categories`]
pub fn calculate_category_amounts(items: &[Transaction], kind: &TransactionKind) -> Vec<Amount> {
    category_breakdown(items, kind)
        .into_iter()
        .map(|row| row.amount)
        .collect()
}

/// One labeled row of a category breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Amount,
    pub transaction_count: usize,
    /// Palette color for this category's position
    pub color: &'static str,
}

/// Labeled per-category sums in the same order as [`extract_categories`]
pub fn category_breakdown(items: &[Transaction], kind: &TransactionKind) -> Vec<CategoryAmount> {
    extract_categories(items, kind)
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            let matching = items
                .iter()
                .filter(|t| &t.kind == kind && t.has_category(&category));
            let (amount, transaction_count) = matching
                .fold((Amount::zero(), 0), |(sum, count), t| (sum + t.amount, count + 1));
            CategoryAmount {
                category,
                amount,
                transaction_count,
                color: color_for(index),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, TransactionId, TransactionInput};

    fn txn(kind: TransactionKind, amount: f64, categories: &[&str]) -> Transaction {
        Transaction::from_input(
            1,
            TransactionId::generate(),
            kind,
            &TransactionInput::new()
                .amount(amount)
                .categories(categories.iter().copied()),
            Month::JANUARY,
        )
    }

    #[test]
    fn test_same_category_accumulates() {
        let items = vec![
            txn(TransactionKind::Expense, 100.0, &["Food"]),
            txn(TransactionKind::Expense, 50.0, &["Food"]),
        ];
        assert_eq!(
            extract_categories(&items, &TransactionKind::Expense),
            vec!["Food"]
        );
        assert_eq!(
            calculate_category_amounts(&items, &TransactionKind::Expense),
            vec![Amount::new(150.0)]
        );
    }

    #[test]
    fn test_first_seen_order_and_kind_filter() {
        let items = vec![
            txn(TransactionKind::Expense, 10.0, &["Rent"]),
            txn(TransactionKind::Income, 500.0, &["Salary"]),
            txn(TransactionKind::Expense, 5.0, &["Food", "Rent"]),
            txn(TransactionKind::Expense, 7.0, &[]),
        ];
        assert_eq!(
            extract_categories(&items, &TransactionKind::Expense),
            vec!["Rent", "Food"]
        );
        assert_eq!(
            extract_categories(&items, &TransactionKind::Income),
            vec!["Salary"]
        );
    }

    #[test]
    fn test_multi_category_counts_full_amount() {
        let items = vec![
            txn(TransactionKind::Expense, 30.0, &["Travel", "Food"]),
            txn(TransactionKind::Expense, 20.0, &["Food"]),
        ];
        let rows = category_breakdown(&items, &TransactionKind::Expense);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Travel");
        assert_eq!(rows[0].amount.value(), 30.0);
        assert_eq!(rows[0].transaction_count, 1);
        assert_eq!(rows[1].category, "Food");
        assert_eq!(rows[1].amount.value(), 50.0);
        assert_eq!(rows[1].transaction_count, 2);
        assert_eq!(rows[1].color, color_for(1));
    }

    #[test]
    fn test_uncategorized_records_are_excluded() {
        let items = vec![txn(TransactionKind::Expense, 9.0, &[])];
        assert!(extract_categories(&items, &TransactionKind::Expense).is_empty());
        assert!(calculate_category_amounts(&items, &TransactionKind::Expense).is_empty());
    }
}
