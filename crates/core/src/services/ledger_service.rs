use chrono::{DateTime, Datelike, Local, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::chart::{WeeklySpend, WEEKDAY_LABELS};
use crate::models::ledger::Ledger;
use crate::models::transaction::Transaction;

/// Records and removes transactions, and derives spending aggregates.
///
/// Pure business logic — no I/O. Validation happens before any mutation,
/// so a rejected call leaves the ledger untouched.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Append a transaction.
    /// Rejects non-positive or non-finite amounts and ids already present.
    pub fn record(&self, ledger: &mut Ledger, transaction: Transaction) -> Result<(), CoreError> {
        if !transaction.amount.is_finite() || transaction.amount <= 0.0 {
            return Err(CoreError::InvalidAmount(transaction.amount));
        }
        if ledger.contains(transaction.id) {
            return Err(CoreError::DuplicateTransaction(transaction.id.to_string()));
        }

        debug!(id = %transaction.id, kind = %transaction.kind, amount = transaction.amount, "Recording transaction");
        ledger.transactions.push(transaction);
        Ok(())
    }

    /// Remove a transaction by id and hand it back, so the caller can
    /// reverse whatever its creation did.
    pub fn remove(&self, ledger: &mut Ledger, id: Uuid) -> Result<Transaction, CoreError> {
        let idx = ledger
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        let removed = ledger.transactions.remove(idx);
        debug!(id = %removed.id, kind = %removed.kind, "Removed transaction");
        Ok(removed)
    }

    /// Sum of expenses whose local calendar day is the same as `now`'s.
    #[must_use]
    pub fn spent_today(&self, ledger: &Ledger, now: DateTime<Utc>) -> f64 {
        let today = now.with_timezone(&Local).date_naive();
        ledger
            .iter()
            .filter(|t| t.is_expense() && t.local_date() == today)
            .map(|t| t.amount)
            .sum()
    }

    /// Expenses grouped by weekday, Monday first, always seven entries.
    ///
    /// Aggregates over the whole history, not a rolling week: every Monday
    /// ever recorded lands in the "Mon" bucket. Callers wanting a 7-day
    /// window must filter the ledger first.
    #[must_use]
    pub fn weekly_series(&self, ledger: &Ledger) -> Vec<WeeklySpend> {
        let mut totals = [0.0_f64; 7];
        for t in ledger.iter().filter(|t| t.is_expense()) {
            let idx = t.local_date().weekday().num_days_from_monday() as usize;
            totals[idx] += t.amount;
        }

        WEEKDAY_LABELS
            .iter()
            .zip(totals)
            .map(|(day, spent)| WeeklySpend {
                day: (*day).to_string(),
                spent,
            })
            .collect()
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
