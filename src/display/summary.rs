//! Ledger summary formatting
//!
//! Renders a `LedgerSnapshot` as the plain-text views the `pocket` binary
//! prints: the overview, a category breakdown and the twelve-month table.

use super::report::{double_separator, format_bar, separator, truncate};
use crate::config::ViewScope;
use crate::models::{Amount, Transaction};
use crate::reports::{CategoryAmount, LedgerSnapshot, MonthTotal};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

fn scope_label(snapshot: &LedgerSnapshot) -> String {
    match snapshot.scope {
        ViewScope::CurrentMonth => snapshot.current_month.name().to_string(),
        ViewScope::AllMonths => "All months".to_string(),
    }
}

/// Format one transaction as a list row
pub fn format_transaction_row(txn: &Transaction, places: usize) -> String {
    let description = if txn.description.is_empty() {
        "(no description)".to_string()
    } else {
        truncate(&txn.description, 24)
    };
    let categories = if txn.categories.is_empty() {
        String::new()
    } else {
        format!(" [{}]", txn.categories.join(", "))
    };

    format!(
        "  {:>3} {} {:<24} {:>12}{}",
        txn.sequence,
        txn.month.short_name(),
        description,
        txn.amount.format_fixed(places),
        categories
    )
}

/// Format category rows with amounts and bars
pub fn format_category_rows(rows: &[CategoryAmount], places: usize) -> String {
    if rows.is_empty() {
        return "  (no categories)\n".to_string();
    }

    let max = rows
        .iter()
        .map(|r| r.amount.value())
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);

    let mut output = String::new();
    for row in rows {
        output.push_str(&format!(
            "  {:<20} {:>12} {:>4}  {}\n",
            truncate(&row.category, 20),
            row.amount.format_fixed(places),
            row.transaction_count,
            format_bar(row.amount.value(), max, BAR_WIDTH)
        ));
    }
    output
}

/// Format the overview: totals, scoped lists and category breakdowns
pub fn format_summary(snapshot: &LedgerSnapshot, places: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Ledger Summary: {}\n", scope_label(snapshot)));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format_total_line("Total Income", snapshot.total_income(), places));
    output.push_str(&format_total_line("Total Expense", snapshot.total_expense(), places));
    output.push_str(&format_total_line("Net Balance", snapshot.net_balance(), places));

    output.push_str(&format!("\nIncome ({})\n", snapshot.income_list.len()));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    for txn in &snapshot.income_list {
        output.push_str(&format_transaction_row(txn, places));
        output.push('\n');
    }

    output.push_str(&format!("\nExpenses ({})\n", snapshot.expense_list.len()));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    for txn in &snapshot.expense_list {
        output.push_str(&format_transaction_row(txn, places));
        output.push('\n');
    }

    output.push_str("\nIncome by Category\n");
    output.push_str(&format_category_rows(&snapshot.income_categories, places));
    output.push_str("\nExpenses by Category\n");
    output.push_str(&format_category_rows(&snapshot.expense_categories, places));

    output
}

fn format_total_line(label: &str, amount: Amount, places: usize) -> String {
    format!("{:<20} {:>14}\n", format!("{}:", label), amount.format_fixed(places))
}

/// Format the twelve-month income/expense table
pub fn format_month_totals(totals: &[MonthTotal], places: usize) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:>12} {:>12} {:>12}\n",
        "Month", "Income", "Expense", "Net"
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    for total in totals {
        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12}\n",
            total.month.name(),
            total.income.format_fixed(places),
            total.expense.format_fixed(places),
            total.net().format_fixed(places)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, TransactionInput};
    use crate::services::LedgerStore;

    fn sample_ledger() -> LedgerStore {
        let mut ledger = LedgerStore::new().starting_at(Month::new(3).unwrap());
        ledger
            .add_item(
                TransactionInput::new()
                    .amount(2500)
                    .description("Paycheck")
                    .category("Salary"),
                "income",
            )
            .unwrap();
        ledger
            .add_item(TransactionInput::new().amount(120.5).category("Food"), "expense")
            .unwrap();
        ledger
    }

    #[test]
    fn test_summary_contains_totals() {
        let ledger = sample_ledger();
        let text = format_summary(ledger.snapshot(), 2);

        assert!(text.starts_with("Ledger Summary: March"));
        assert!(text.contains("Total Income:"));
        assert!(text.contains("2500.00"));
        assert!(text.contains("2379.50"));
        assert!(text.contains("Paycheck"));
        assert!(text.contains("(no description)"));
        assert!(text.contains("Salary"));
    }

    #[test]
    fn test_category_rows_empty() {
        assert_eq!(format_category_rows(&[], 2), "  (no categories)\n");
    }

    #[test]
    fn test_month_table_has_twelve_rows() {
        let ledger = sample_ledger();
        let text = format_month_totals(ledger.group_by_month_total(), 2);

        assert_eq!(text.lines().count(), 14);
        assert!(text.contains("March"));
        assert!(text.contains("120.50"));
    }

    #[test]
    fn test_transaction_row() {
        let ledger = sample_ledger();
        let row = format_transaction_row(&ledger.combined_list()[1], 0);
        assert!(row.contains("Mar"));
        assert!(row.ends_with("[Food]"));
    }
}
