use thiserror::Error;

use crate::models::session::SessionPhase;

/// Unified error type for the entire mochi-budget-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Budget / Onboarding ─────────────────────────────────────────
    #[error("Invalid budget input: {0}")]
    InvalidBudgetInput(String),

    #[error("Savings target {savings} exceeds monthly income {income}")]
    NegativeBudget { income: f64, savings: f64 },

    #[error("Operation not allowed while the session is {0}")]
    WrongPhase(SessionPhase),

    // ── Ledger ──────────────────────────────────────────────────────
    #[error("Transaction amount must be positive, got {0}")]
    InvalidAmount(f64),

    #[error("Transaction not found: {0}")]
    NotFound(String),

    #[error("Transaction already recorded: {0}")]
    DuplicateTransaction(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Storage / File ──────────────────────────────────────────────
    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Unsupported file version: {0}")]
    UnsupportedVersion(u16),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

impl CoreError {
    /// Whether the session should surface this error to the user as a notice.
    ///
    /// Rejected amounts and unknown ids are dropped silently; onboarding
    /// failures re-prompt the user with a message.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidBudgetInput(_) | CoreError::NegativeBudget { .. }
        )
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<bincode::Error> for CoreError {
    fn from(e: bincode::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
