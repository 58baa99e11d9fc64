use serde::{Deserialize, Serialize};

/// The user's budget profile, created at onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Monthly income entered at onboarding
    pub monthly_income: f64,

    /// Amount the user wants to keep aside each month
    pub savings_target: f64,

    /// Money available per calendar day. Derived at onboarding, then moved
    /// up and down as income transactions are recorded and deleted. Never negative.
    pub daily_budget_limit: f64,
}
