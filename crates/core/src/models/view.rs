use serde::{Deserialize, Serialize};

use super::chart::WeeklySpend;
use super::mood::Mood;
use super::notice::Notice;
use super::session::SessionPhase;
use super::transaction::{Transaction, TransactionKind};

/// Coarse spending pressure, used to color the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BudgetPressure {
    /// Under 50% of the limit used
    Calm,
    /// 50% or more
    Elevated,
    /// 75% or more
    High,
    /// 90% or more
    Critical,
    /// Strictly more than 100%
    Over,
}

impl BudgetPressure {
    /// Classify a spend ratio given in percent.
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent > 100.0 {
            BudgetPressure::Over
        } else if percent >= 90.0 {
            BudgetPressure::Critical
        } else if percent >= 75.0 {
            BudgetPressure::High
        } else if percent >= 50.0 {
            BudgetPressure::Elevated
        } else {
            BudgetPressure::Calm
        }
    }
}

/// Read-only view handed to the renderer after every operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: SessionPhase,

    pub mood: Mood,

    /// What Mochi is saying right now
    pub dialogue: String,

    /// Kind of the entry in progress, if any
    pub pending_kind: Option<TransactionKind>,

    pub daily_limit: f64,

    pub spent_today: f64,

    /// `daily_limit - spent_today`. Negative once overspent.
    pub remaining: f64,

    /// Spend ratio clamped to 0..=100, for a progress bar
    pub progress_percent: f64,

    pub pressure: BudgetPressure,

    /// All transactions in insertion order
    pub transactions: Vec<Transaction>,

    pub weekly: Vec<WeeklySpend>,

    pub streak: u32,

    /// Notices raised since the last render, oldest first
    pub notices: Vec<Notice>,
}
