//! Ledger store
//!
//! Owns the transaction sequence and the current-month pointer, exposes the
//! actions that mutate them, and serves derived views from a snapshot that is
//! memoized until the next mutation.

use std::cell::OnceCell;
use std::collections::HashSet;

use tracing::{debug, warn};

use crate::audit::{AuditEntry, Operation};
use crate::config::{AmountPolicy, Settings, ViewScope};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Amount, LedgerEntry, Month, Transaction, TransactionId, TransactionInput, TransactionKind,
};
use crate::reports::{CategoryAmount, LedgerSnapshot, MonthGroups, MonthTotal};

/// In-memory income/expense ledger
#[derive(Debug)]
pub struct LedgerStore {
    combined_list: Vec<Transaction>,
    current_month: Month,
    settings: Settings,
    ids: HashSet<TransactionId>,
    audit_trail: Vec<AuditEntry>,
    snapshot: OnceCell<LedgerSnapshot>,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore {
    /// Create an empty ledger with default settings, pointed at today's month
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create an empty ledger with the given settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            combined_list: Vec::new(),
            current_month: Month::current(),
            settings,
            ids: HashSet::new(),
            audit_trail: Vec::new(),
            snapshot: OnceCell::new(),
        }
    }

    /// Start the current-month pointer somewhere other than today
    pub fn starting_at(mut self, month: Month) -> Self {
        self.current_month = month;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn current_month(&self) -> Month {
        self.current_month
    }

    /// Every transaction in insertion order
    pub fn combined_list(&self) -> &[Transaction] {
        &self.combined_list
    }

    pub fn len(&self) -> usize {
        self.combined_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combined_list.is_empty()
    }

    /// Look up a transaction by id
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.combined_list.iter().find(|t| &t.id == id)
    }

    /// Append a transaction
    ///
    /// The month defaults to the current-month pointer and the amount is
    /// coerced from whatever the caller supplied. Unknown kinds are stored
    /// verbatim. Fails only under [`AmountPolicy::Reject`] when the amount is
    /// not numeric, in which case the ledger is unchanged.
    pub fn add_item(
        &mut self,
        data: TransactionInput,
        kind: impl Into<TransactionKind>,
    ) -> LedgerResult<&Transaction> {
        let kind = kind.into();

        if Amount::coerce(data.amount.as_ref()).is_nan() {
            match self.settings.amount_policy {
                AmountPolicy::Reject => {
                    return Err(LedgerError::non_numeric(data.raw_amount()));
                }
                AmountPolicy::Coerce => {
                    warn!(raw = %data.raw_amount(), kind = %kind, "amount coerced to NaN");
                }
            }
        }

        let id = self.fresh_id();
        let sequence = self.combined_list.len() as u64 + 1;
        let txn = Transaction::from_input(sequence, id, kind, &data, self.current_month);

        debug!(
            id = %txn.id,
            kind = %txn.kind,
            amount = %txn.amount,
            month = txn.month.number(),
            "transaction added"
        );

        self.audit_trail
            .push(AuditEntry::create(txn.id.as_str(), txn.kind.as_str(), &txn));
        self.ids.insert(txn.id.clone());
        self.combined_list.push(txn);
        self.invalidate();

        Ok(&self.combined_list[self.combined_list.len() - 1])
    }

    /// Move the current-month pointer
    pub fn set_current_month(&mut self, month: Month) {
        debug!(month = month.number(), "current month set");
        self.current_month = month;
        self.audit_trail.push(AuditEntry::set_month(month.number()));
        self.invalidate();
    }

    /// Change which transactions the scoped views cover
    pub fn set_view_scope(&mut self, scope: ViewScope) {
        self.settings.view_scope = scope;
        self.invalidate();
    }

    /// Removal is not supported: the ledger is append-only
    ///
    /// The call is recorded in the audit trail with `applied = false` and has
    /// no other effect.
    pub fn remove_item(&mut self, id: &TransactionId, kind: &TransactionKind) {
        debug!(id = %id, kind = %kind, "remove_item ignored");
        self.audit_trail
            .push(AuditEntry::ignored(Operation::Delete, id.as_str(), kind.as_str()));
    }

    /// Updates are not supported: recorded transactions are immutable
    ///
    /// The call is recorded in the audit trail with `applied = false` and has
    /// no other effect.
    pub fn update_item(&mut self, id: &TransactionId, kind: &TransactionKind) {
        debug!(id = %id, kind = %kind, "update_item ignored");
        self.audit_trail
            .push(AuditEntry::ignored(Operation::Update, id.as_str(), kind.as_str()));
    }

    /// Apply a batch of entries in order, returning how many were added
    ///
    /// Stops at the first rejected entry; earlier entries stay applied.
    pub fn replay<I>(&mut self, entries: I) -> LedgerResult<usize>
    where
        I: IntoIterator<Item = LedgerEntry>,
    {
        let mut added = 0;
        for entry in entries {
            self.add_item(entry.data, entry.kind).map_err(|e| {
                LedgerError::Import(format!("entry {} rejected: {}", added + 1, e))
            })?;
            added += 1;
        }
        Ok(added)
    }

    /// The in-memory audit journal, oldest first
    pub fn audit_trail(&self) -> &[AuditEntry] {
        &self.audit_trail
    }

    /// Drain the audit journal (used when flushing it to a log file)
    pub fn take_audit_trail(&mut self) -> Vec<AuditEntry> {
        std::mem::take(&mut self.audit_trail)
    }

    fn fresh_id(&self) -> TransactionId {
        loop {
            let id = TransactionId::generate();
            if !self.ids.contains(&id) {
                return id;
            }
        }
    }

    fn invalidate(&mut self) {
        self.snapshot.take();
    }

    /// All derived views, computed on first read after a mutation
    pub fn snapshot(&self) -> &LedgerSnapshot {
        self.snapshot.get_or_init(|| {
            LedgerSnapshot::compute(
                &self.combined_list,
                self.current_month,
                self.settings.view_scope,
            )
        })
    }

    pub fn income_list(&self) -> &[Transaction] {
        &self.snapshot().income_list
    }

    pub fn expense_list(&self) -> &[Transaction] {
        &self.snapshot().expense_list
    }

    pub fn total_income(&self) -> Amount {
        self.snapshot().total_income()
    }

    pub fn total_expense(&self) -> Amount {
        self.snapshot().total_expense()
    }

    pub fn net_balance(&self) -> Amount {
        self.snapshot().net_balance()
    }

    /// Distinct category labels among scoped records of `kind`
    pub fn extract_categories(&self, kind: &TransactionKind) -> Vec<String> {
        self.snapshot().category_labels(kind)
    }

    /// Per-category sums aligned with [`Self::extract_categories`]
    pub fn calculate_category_amounts(&self, kind: &TransactionKind) -> Vec<Amount> {
        self.snapshot().category_amounts(kind)
    }

    /// Labeled per-category sums for `kind`
    pub fn category_breakdown(&self, kind: &TransactionKind) -> &[CategoryAmount] {
        self.snapshot().categories_for(kind)
    }

    pub fn income_categories(&self) -> Vec<String> {
        self.extract_categories(&TransactionKind::Income)
    }

    pub fn expense_categories(&self) -> Vec<String> {
        self.extract_categories(&TransactionKind::Expense)
    }

    pub fn income_amounts_by_category(&self) -> Vec<Amount> {
        self.calculate_category_amounts(&TransactionKind::Income)
    }

    pub fn expense_amounts_by_category(&self) -> Vec<Amount> {
        self.calculate_category_amounts(&TransactionKind::Expense)
    }

    /// Whole-ledger grouping by month
    pub fn group_by_month_data(&self) -> &MonthGroups {
        &self.snapshot().group_by_month_data
    }

    /// Income/expense totals for all twelve months
    pub fn group_by_month_total(&self) -> &[MonthTotal] {
        &self.snapshot().group_by_month_total
    }

    /// Income/expense totals of one month
    pub fn month_total(&self, month: Month) -> MonthTotal {
        self.snapshot().month_total(month)
    }
}
