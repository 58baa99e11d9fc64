use serde::{Deserialize, Serialize};

/// Fixed weekday labels, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Total spent on one weekday, for the weekly bar chart.
///
/// The core generates these, the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySpend {
    /// Short weekday label ("Mon".."Sun")
    pub day: String,

    /// Sum of expenses recorded on that weekday, across all history
    pub spent: f64,
}
