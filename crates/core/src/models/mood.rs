use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::transaction::TransactionKind;

/// Mochi's emotional state, derived from spending pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    /// Under half of today's limit spent
    Happy,
    /// Income just arrived (or is being entered)
    Euphoric,
    /// 90% or more of the limit spent
    Sad,
    /// 50% or more of the limit spent
    Anxious,
    /// 75% or more of the limit spent
    Panic,
    /// Limit exhausted
    Dead,
    /// Low-pressure expense being entered. Only ever a preview.
    Begging,
}

impl Mood {
    /// Severity rank used by the spending thresholds.
    ///
    /// Happy, Begging and Euphoric share the bottom rank; the rest climb
    /// Anxious < Panic < Sad < Dead.
    #[must_use]
    pub fn severity(&self) -> u8 {
        match self {
            Mood::Happy | Mood::Euphoric | Mood::Begging => 0,
            Mood::Anxious => 1,
            Mood::Panic => 2,
            Mood::Sad => 3,
            Mood::Dead => 4,
        }
    }

    /// The line Mochi says in this mood.
    ///
    /// `pending` is the kind of transaction currently being entered, if any;
    /// an entry in progress changes what Mochi has to say.
    #[must_use]
    pub fn dialogue(&self, pending: Option<TransactionKind>) -> &'static str {
        match pending {
            Some(TransactionKind::Income) => return "Make it rain!",
            Some(TransactionKind::Expense) => match self {
                Mood::Dead => return "I see the light... stop...",
                Mood::Sad => return "So hungry... don't spend...",
                Mood::Panic => return "NO! WE ARE BROKE! STOP!",
                Mood::Anxious => return "Do we really need this?",
                Mood::Begging => return "Please... I'm saving for a boat...",
                Mood::Happy | Mood::Euphoric => {}
            },
            None => {}
        }

        match self {
            Mood::Euphoric => "I LOVE MONEY! YAY!",
            Mood::Happy => "Purrfect! Keep saving!",
            Mood::Sad => "My tummy rumbles... so hungry...",
            Mood::Anxious => "I'm getting nervous...",
            Mood::Panic => "PUT THE WALLET DOWN!",
            Mood::Dead => "*Ghost Noises*",
            Mood::Begging => "Meow.",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mood::Happy => write!(f, "HAPPY"),
            Mood::Euphoric => write!(f, "EUPHORIC"),
            Mood::Sad => write!(f, "SAD"),
            Mood::Anxious => write!(f, "ANXIOUS"),
            Mood::Panic => write!(f, "PANIC"),
            Mood::Dead => write!(f, "DEAD"),
            Mood::Begging => write!(f, "BEGGING"),
        }
    }
}

/// A transaction the user is typing but has not committed yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingEntry {
    pub kind: TransactionKind,

    /// Amount typed so far. `None` while the field is empty.
    pub amount: Option<f64>,
}

impl PendingEntry {
    pub fn new(kind: TransactionKind) -> Self {
        Self { kind, amount: None }
    }

    pub fn with_amount(kind: TransactionKind, amount: f64) -> Self {
        Self {
            kind,
            amount: Some(amount),
        }
    }
}

/// A forced mood that wins over everything else until `expires_at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodOverride {
    pub mood: Mood,
    pub expires_at: DateTime<Utc>,
}

impl MoodOverride {
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Everything the mood resolver looks at. Ephemeral, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoodInput {
    /// Sum of today's expenses
    pub spent_today: f64,

    /// Current daily budget limit
    pub daily_limit: f64,

    /// Entry in progress, if any
    pub pending: Option<PendingEntry>,

    /// Active (not yet expired) override, if any
    pub override_mood: Option<Mood>,
}
