use serde::{Deserialize, Serialize};

use super::ledger::Ledger;
use super::profile::Profile;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionPhase {
    /// No budget yet. The user must enter income and savings target.
    Onboarding,
    /// Budget set up, transactions can be recorded.
    Active,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPhase::Onboarding => write!(f, "ONBOARDING"),
            SessionPhase::Active => write!(f, "ACTIVE"),
        }
    }
}

/// The durable part of a session. This is what gets saved and loaded.
///
/// Mood inputs (pending entry, override) and notices are transient and
/// deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// `None` while onboarding
    #[serde(default)]
    pub profile: Option<Profile>,

    #[serde(default)]
    pub ledger: Ledger,

    #[serde(default)]
    pub streak: u32,
}

impl SessionSnapshot {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.profile.is_some() {
            SessionPhase::Active
        } else {
            SessionPhase::Onboarding
        }
    }
}
