//! CLI commands for ledger reports

use clap::ValueEnum;

use crate::config::ViewScope;
use crate::display::{format_category_rows, format_month_totals, format_summary};
use crate::error::LedgerResult;
use crate::models::TransactionKind;
use crate::services::LedgerStore;

/// Transaction kind selector for category reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

/// Print totals, scoped lists and category breakdowns
pub fn handle_summary_command(ledger: &LedgerStore) -> LedgerResult<()> {
    let places = ledger.settings().decimal_places;
    print!("{}", format_summary(ledger.snapshot(), places));
    Ok(())
}

/// Print the twelve-month income/expense table
pub fn handle_months_command(ledger: &LedgerStore) -> LedgerResult<()> {
    let places = ledger.settings().decimal_places;
    print!("{}", format_month_totals(ledger.group_by_month_total(), places));
    Ok(())
}

/// Print the category breakdown for one kind
pub fn handle_categories_command(ledger: &LedgerStore, kind: KindArg) -> LedgerResult<()> {
    let kind = TransactionKind::from(kind);
    let places = ledger.settings().decimal_places;

    let scope = match ledger.settings().view_scope {
        ViewScope::CurrentMonth => ledger.current_month().name().to_string(),
        ViewScope::AllMonths => "all months".to_string(),
    };
    println!("{} categories ({})", capitalize(kind.as_str()), scope);
    print!(
        "{}",
        format_category_rows(ledger.category_breakdown(&kind), places)
    );
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_arg_conversion() {
        assert_eq!(TransactionKind::from(KindArg::Income), TransactionKind::Income);
        assert_eq!(TransactionKind::from(KindArg::Expense), TransactionKind::Expense);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("expense"), "Expense");
        assert_eq!(capitalize(""), "");
    }
}
