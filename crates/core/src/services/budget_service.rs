use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::errors::CoreError;

/// Turns income and savings goals into a daily spending limit.
///
/// Pure business logic: no I/O, no clock. The caller supplies the number
/// of days in the current month (see [`days_in_month`]).
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Daily limit for a fresh budget: `(income - savings) / days`.
    ///
    /// Fails with `InvalidBudgetInput` unless income is a positive finite
    /// number and savings is finite, and with `NegativeBudget` when the
    /// savings goal exceeds income.
    pub fn compute_initial_daily_limit(
        &self,
        monthly_income: f64,
        savings_target: f64,
        days_in_month: u32,
    ) -> Result<f64, CoreError> {
        if !monthly_income.is_finite() || monthly_income <= 0.0 {
            return Err(CoreError::InvalidBudgetInput(format!(
                "monthly income must be a positive number, got {monthly_income}"
            )));
        }
        if !savings_target.is_finite() {
            return Err(CoreError::InvalidBudgetInput(format!(
                "savings target must be a number, got {savings_target}"
            )));
        }
        if days_in_month == 0 {
            return Err(CoreError::InvalidBudgetInput(
                "days in month must be at least 1".into(),
            ));
        }

        let limit = (monthly_income - savings_target) / f64::from(days_in_month);
        if limit < 0.0 {
            return Err(CoreError::NegativeBudget {
                income: monthly_income,
                savings: savings_target,
            });
        }

        debug!(monthly_income, savings_target, days_in_month, limit, "Computed initial daily limit");
        Ok(limit)
    }

    /// Raise the limit by an income amount spread over the month.
    #[must_use]
    pub fn apply_income_delta(&self, current_limit: f64, income_amount: f64, days_in_month: u32) -> f64 {
        current_limit + Self::daily_share(income_amount, days_in_month)
    }

    /// Undo [`apply_income_delta`](Self::apply_income_delta). Clamped at zero.
    #[must_use]
    pub fn reverse_income_delta(&self, current_limit: f64, income_amount: f64, days_in_month: u32) -> f64 {
        (current_limit - Self::daily_share(income_amount, days_in_month)).max(0.0)
    }

    fn daily_share(amount: f64, days_in_month: u32) -> f64 {
        amount / f64::from(days_in_month.max(1))
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of days (28-31) in the calendar month containing `date`.
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(31, |last| last.day())
}
