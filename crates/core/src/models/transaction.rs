use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Money coming in. Raises the daily budget limit.
    Income,
    /// Money going out. Counts toward today's spending.
    Expense,
}

impl TransactionKind {
    /// Description used when the user leaves the field empty.
    #[must_use]
    pub fn default_description(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Deposit",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "INCOME"),
            TransactionKind::Expense => write!(f, "EXPENSE"),
        }
    }
}

/// A single recorded income or expense.
///
/// Transactions are immutable once recorded; the only way to change one is
/// to delete it, which also reverses its effect on the daily limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, never reused
    pub id: Uuid,

    /// When the transaction was recorded
    pub timestamp: DateTime<Utc>,

    /// Amount of money (always positive)
    pub amount: f64,

    /// Income or Expense
    pub kind: TransactionKind,

    /// Free-text label
    pub description: String,
}

impl Transaction {
    /// Create a transaction with a fresh id.
    /// An empty (or whitespace-only) description falls back to the kind's default.
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        let description = description.into();
        let description = if description.trim().is_empty() {
            kind.default_description().to_string()
        } else {
            description
        };
        Self {
            id: Uuid::new_v4(),
            timestamp,
            amount,
            kind,
            description,
        }
    }

    /// Calendar day of this transaction in local time.
    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }

    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
