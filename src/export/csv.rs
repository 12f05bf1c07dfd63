//! CSV export of transactions and month totals

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::reports::MonthTotal;
use crate::services::LedgerStore;

fn export_err(e: csv::Error) -> LedgerError {
    LedgerError::Export(e.to_string())
}

/// Export every transaction, one row each, in ledger order
///
/// Multiple categories are joined with `;` in a single column.
pub fn export_transactions_csv<W: Write>(ledger: &LedgerStore, writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Sequence",
            "ID",
            "Type",
            "Month",
            "Amount",
            "Description",
            "Categories",
        ])
        .map_err(export_err)?;

    for txn in ledger.combined_list() {
        csv_writer
            .write_record([
                txn.sequence.to_string(),
                txn.id.to_string(),
                txn.kind.to_string(),
                txn.month.number().to_string(),
                txn.amount.format_fixed(2),
                txn.description.clone(),
                txn.categories.join(";"),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// Export the twelve month totals
pub fn export_month_totals_csv<W: Write>(totals: &[MonthTotal], writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Month", "Name", "Income", "Expense", "Net"])
        .map_err(export_err)?;

    for total in totals {
        csv_writer
            .write_record([
                total.month.number().to_string(),
                total.month.name().to_string(),
                total.income.format_fixed(2),
                total.expense.format_fixed(2),
                total.net().format_fixed(2),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
