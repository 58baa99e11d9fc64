use serde::{Deserialize, Serialize};

use super::transaction::TransactionKind;

/// One row of the spending report.
///
/// Monetary columns are already formatted as fixed-point strings with two
/// fractional digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Local calendar date (YYYY-MM-DD)
    pub date: String,

    /// Local wall-clock time (HH:MM:SS)
    pub time: String,

    pub kind: TransactionKind,

    pub description: String,

    pub amount: String,

    /// Daily limit at the time of export (same for every row)
    pub daily_limit: String,
}
