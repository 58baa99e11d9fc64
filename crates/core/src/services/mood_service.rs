use crate::models::mood::{Mood, MoodInput};
use crate::models::transaction::TransactionKind;

/// Resolves Mochi's mood from spending pressure.
///
/// Stateless: the mood is recomputed from scratch for every input. The
/// only state that outlives a call (the timed override) is owned by the
/// session and arrives here already filtered for expiry.
pub struct MoodService;

impl MoodService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the mood, highest priority first:
    ///
    /// 1. an active override wins unconditionally;
    /// 2. pending income is always EUPHORIC;
    /// 3. a pending expense with an amount previews the post-commit ratio
    ///    using the strict preview tiers (lowest tier BEGGING);
    /// 4. otherwise the steady tiers apply to today's spending.
    #[must_use]
    pub fn resolve(&self, input: &MoodInput) -> Mood {
        if let Some(mood) = input.override_mood {
            return mood;
        }

        match input.pending {
            Some(p) if p.kind == TransactionKind::Income => Mood::Euphoric,
            Some(p) => match p.amount.filter(|a| a.is_finite() && *a >= 0.0) {
                Some(amount) => {
                    Self::preview_tier(spend_ratio_percent(input.spent_today + amount, input.daily_limit))
                }
                None => Self::steady_tier(spend_ratio_percent(input.spent_today, input.daily_limit)),
            },
            None => Self::steady_tier(spend_ratio_percent(input.spent_today, input.daily_limit)),
        }
    }

    /// Steady-state tiers. Inclusive bounds.
    #[must_use]
    pub fn steady_tier(percent: f64) -> Mood {
        if percent >= 100.0 {
            Mood::Dead
        } else if percent >= 90.0 {
            Mood::Sad
        } else if percent >= 75.0 {
            Mood::Panic
        } else if percent >= 50.0 {
            Mood::Anxious
        } else {
            Mood::Happy
        }
    }

    /// Pending-expense preview tiers. Strict bounds, and BEGGING instead of HAPPY.
    #[must_use]
    pub fn preview_tier(percent: f64) -> Mood {
        if percent > 100.0 {
            Mood::Dead
        } else if percent > 90.0 {
            Mood::Sad
        } else if percent > 75.0 {
            Mood::Panic
        } else if percent > 50.0 {
            Mood::Anxious
        } else {
            Mood::Begging
        }
    }
}

impl Default for MoodService {
    fn default() -> Self {
        Self::new()
    }
}

/// `spend / limit * 100`. A limit of zero (or less) counts as unbounded
/// pressure rather than a division fault.
#[must_use]
pub fn spend_ratio_percent(spend: f64, daily_limit: f64) -> f64 {
    if daily_limit <= 0.0 {
        return f64::INFINITY;
    }
    spend / daily_limit * 100.0
}
