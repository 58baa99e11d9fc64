pub mod clock;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod telemetry;

use std::collections::VecDeque;

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use clock::{Clock, SystemClock};
use errors::CoreError;
use models::{
    chart::WeeklySpend,
    export::ExportRecord,
    ledger::Ledger,
    mood::{Mood, MoodInput, MoodOverride, PendingEntry},
    notice::Notice,
    profile::Profile,
    session::{SessionPhase, SessionSnapshot},
    settings::Settings,
    transaction::{Transaction, TransactionKind},
    view::{BudgetPressure, SessionView},
};
use services::{
    budget_service::{days_in_month, BudgetService},
    export_service::ExportService,
    ledger_service::LedgerService,
    mood_service::{spend_ratio_percent, MoodService},
};
use storage::{memory_store::MemoryStore, traits::SnapshotStore};

const MSG_INVALID_NUMBERS: &str = "Please enter valid numbers!";
const MSG_NEGATIVE_BUDGET: &str = "You're saving more than you earn?!";
const MSG_BUDGET_INCREASED: &str = "Budget Increased! Mochi is thrilled!";
const MSG_STREAK_BROKEN: &str = "Streak broken!";
const MSG_INCOME_REMOVED: &str = "Income removed. Budget adjusted.";
const MSG_EXPENSE_REMOVED: &str = "Expense removed.";

/// Main entry point for the Mochi budget engine.
///
/// Owns the whole session: profile, ledger, streak, the in-progress entry,
/// the timed mood override and pending notices. Every mutation goes through
/// its methods, runs to completion, and is persisted to the injected
/// [`SnapshotStore`] afterwards. A failed save is logged and never fails
/// the operation.
#[must_use]
pub struct SessionStore {
    profile: Option<Profile>,
    ledger: Ledger,
    streak: u32,
    pending: Option<PendingEntry>,
    mood_override: Option<MoodOverride>,
    notices: VecDeque<Notice>,
    settings: Settings,
    store: Box<dyn SnapshotStore>,
    clock: Box<dyn Clock>,
    budget_service: BudgetService,
    ledger_service: LedgerService,
    mood_service: MoodService,
    export_service: ExportService,
    /// Set when the last save failed (or nothing was saved since a mutation).
    dirty: bool,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("phase", &self.phase())
            .field("profile", &self.profile)
            .field("transactions", &self.ledger.len())
            .field("streak", &self.streak)
            .field("pending", &self.pending)
            .field("mood_override", &self.mood_override)
            .field("store", &self.store.name())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl SessionStore {
    /// Fresh in-memory session on the system clock.
    pub fn new() -> Self {
        Self::open(Box::new(MemoryStore::new()), Box::new(SystemClock))
    }

    /// Load the session from `store` with default settings.
    ///
    /// Missing or unreadable saved state is discarded and the session starts
    /// fresh in ONBOARDING; the load error is logged, never returned.
    pub fn open(store: Box<dyn SnapshotStore>, clock: Box<dyn Clock>) -> Self {
        Self::build(store, clock, Settings::default())
    }

    /// Like [`open`](Self::open), with explicit settings. Fails only if the settings are invalid.
    pub fn with_settings(
        store: Box<dyn SnapshotStore>,
        clock: Box<dyn Clock>,
        settings: Settings,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(store, clock, settings))
    }

    // ── Onboarding & Reset ──────────────────────────────────────────

    /// Set up the budget from monthly income and savings target.
    ///
    /// On success the session becomes ACTIVE with a streak of 1. On failure
    /// an error notice is queued, the error is returned and the session
    /// stays in ONBOARDING.
    pub fn onboard(&mut self, monthly_income: f64, savings_target: f64) -> Result<(), CoreError> {
        if self.profile.is_some() {
            return Err(CoreError::WrongPhase(SessionPhase::Active));
        }

        let days = self.days_in_current_month();
        let limit = match self
            .budget_service
            .compute_initial_daily_limit(monthly_income, savings_target, days)
        {
            Ok(limit) => limit,
            Err(e) => {
                warn!(error = %e, "Onboarding rejected");
                self.notify_error(&e);
                return Err(e);
            }
        };

        self.profile = Some(Profile {
            monthly_income,
            savings_target,
            daily_budget_limit: limit,
        });
        self.streak = 1;
        info!(daily_limit = limit, days_in_month = days, "Session onboarded");
        self.persist();
        Ok(())
    }

    /// Wipe profile, ledger and streak and return to ONBOARDING.
    ///
    /// Irreversible: the caller must have the user's confirmation.
    pub fn reset(&mut self) {
        self.profile = None;
        self.ledger = Ledger::new();
        self.streak = 0;
        self.pending = None;
        self.mood_override = None;
        self.notices.clear();

        match self.store.clear() {
            Ok(()) => self.dirty = false,
            Err(e) => {
                warn!(store = self.store.name(), error = %e, "Failed to clear saved session");
                self.dirty = true;
            }
        }
        info!("Session reset");
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Record a transaction now. Returns its id.
    ///
    /// Income raises the daily limit by `amount / days_in_month` and makes
    /// Mochi EUPHORIC for a while. An expense that pushes today's spending
    /// past the limit breaks the streak. A non-positive amount, or income so
    /// large the limit would overflow, is rejected with `InvalidAmount` and
    /// nothing changes.
    pub fn commit_transaction(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        description: &str,
    ) -> Result<Uuid, CoreError> {
        let daily_limit = self
            .profile
            .as_ref()
            .map(|p| p.daily_budget_limit)
            .ok_or(CoreError::WrongPhase(SessionPhase::Onboarding))?;

        let now = self.clock.now();
        let description = if description.trim().is_empty() {
            self.default_description(kind).to_string()
        } else {
            description.to_string()
        };
        let transaction = Transaction::new(kind, amount, now, description);
        let id = transaction.id;

        // Income must leave the daily limit finite.
        let raised_limit = match kind {
            TransactionKind::Income => {
                let days = days_in_month(now.with_timezone(&Local).date_naive());
                let new_limit = self.budget_service.apply_income_delta(daily_limit, amount, days);
                if !new_limit.is_finite() {
                    return Err(CoreError::InvalidAmount(amount));
                }
                Some(new_limit)
            }
            TransactionKind::Expense => None,
        };

        // Validates before touching the ledger; nothing below can fail.
        self.ledger_service.record(&mut self.ledger, transaction)?;

        match raised_limit {
            Some(new_limit) => {
                self.set_daily_limit(new_limit);
                self.start_override(Mood::Euphoric, now);
                self.notices.push_back(Notice::success(MSG_BUDGET_INCREASED));
                info!(%id, amount, daily_limit = new_limit, "Income committed");
            }
            None => {
                self.cancel_override();
                let spent = self.ledger_service.spent_today(&self.ledger, now);
                if spent > daily_limit {
                    self.streak = 0;
                    self.notices.push_back(Notice::error(MSG_STREAK_BROKEN));
                    info!(%id, amount, spent_today = spent, daily_limit, "Expense broke the streak");
                } else {
                    info!(%id, amount, spent_today = spent, "Expense committed");
                }
            }
        }

        self.pending = None;
        self.persist();
        Ok(id)
    }

    /// Commit the entry in progress (see [`begin_entry`](Self::begin_entry)).
    ///
    /// Without a pending entry, or with an empty amount, this is rejected as
    /// `InvalidAmount` and the pending entry is kept.
    pub fn commit_pending(&mut self, description: &str) -> Result<Uuid, CoreError> {
        let entry = self.pending.ok_or(CoreError::InvalidAmount(0.0))?;
        let amount = entry.amount.ok_or(CoreError::InvalidAmount(0.0))?;
        self.commit_transaction(entry.kind, amount, description)
    }

    /// Delete a transaction and undo its effect on the daily limit.
    ///
    /// Unknown ids return `NotFound` and change nothing.
    pub fn delete_transaction(&mut self, id: Uuid) -> Result<Transaction, CoreError> {
        let removed = self.ledger_service.remove(&mut self.ledger, id)?;

        match removed.kind {
            TransactionKind::Income => {
                if let Some(limit) = self.daily_limit() {
                    let days = self.days_in_current_month();
                    let new_limit = self
                        .budget_service
                        .reverse_income_delta(limit, removed.amount, days);
                    self.set_daily_limit(new_limit);
                    info!(%id, amount = removed.amount, daily_limit = new_limit, "Income deleted");
                }
                self.notices.push_back(Notice::info(MSG_INCOME_REMOVED));
            }
            TransactionKind::Expense => {
                info!(%id, amount = removed.amount, "Expense deleted");
                self.notices.push_back(Notice::info(MSG_EXPENSE_REMOVED));
            }
        }

        self.persist();
        Ok(removed)
    }

    /// Get a single transaction by its ID.
    #[must_use]
    pub fn get_transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.ledger.get(id)
    }

    /// All transactions in the order they were recorded.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    // ── Pending Entry (mood preview) ────────────────────────────────

    /// Start typing a new transaction. Replaces any entry in progress.
    pub fn begin_entry(&mut self, kind: TransactionKind) {
        self.pending = Some(PendingEntry::new(kind));
    }

    /// Update the amount typed so far. Ignored when no entry is in progress.
    /// Non-finite or negative amounts count as an empty field.
    pub fn set_pending_amount(&mut self, amount: Option<f64>) {
        if let Some(entry) = self.pending.as_mut() {
            entry.amount = amount.filter(|a| a.is_finite() && *a >= 0.0);
        }
    }

    /// Abandon the entry in progress.
    pub fn cancel_entry(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingEntry> {
        self.pending
    }

    // ── Mood ────────────────────────────────────────────────────────

    /// Mood right now, including any preview and active override.
    /// Always HAPPY while onboarding.
    #[must_use]
    pub fn current_mood(&self) -> Mood {
        match self.mood_input(self.clock.now()) {
            Some(input) => self.mood_service.resolve(&input),
            None => Mood::Happy,
        }
    }

    /// The override currently scheduled, if it has not expired yet.
    #[must_use]
    pub fn active_override(&self) -> Option<MoodOverride> {
        let now = self.clock.now();
        self.mood_override.filter(|o| o.is_active(now))
    }

    /// Drop the override if its time is up. Returns `true` if one expired.
    pub fn expire_override(&mut self) -> bool {
        let now = self.clock.now();
        match self.mood_override {
            Some(o) if !o.is_active(now) => {
                self.mood_override = None;
                debug!(mood = %o.mood, "Mood override expired");
                true
            }
            _ => false,
        }
    }

    /// Cancel the scheduled override immediately.
    pub fn cancel_override(&mut self) {
        if let Some(o) = self.mood_override.take() {
            debug!(mood = %o.mood, "Mood override cancelled");
        }
    }

    // ── Budget Figures ──────────────────────────────────────────────

    /// Current daily limit, `None` while onboarding.
    #[must_use]
    pub fn daily_limit(&self) -> Option<f64> {
        self.profile.as_ref().map(|p| p.daily_budget_limit)
    }

    #[must_use]
    pub fn spent_today(&self) -> f64 {
        self.ledger_service.spent_today(&self.ledger, self.clock.now())
    }

    /// `daily_limit - spent_today`. Negative once overspent.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.daily_limit().unwrap_or(0.0) - self.spent_today()
    }

    /// Lifetime expenses per weekday, Monday first.
    #[must_use]
    pub fn weekly_series(&self) -> Vec<WeeklySpend> {
        self.ledger_service.weekly_series(&self.ledger)
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.profile.is_some() {
            SessionPhase::Active
        } else {
            SessionPhase::Onboarding
        }
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Notices raised since the last call, oldest first. Each is returned once.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    /// Everything the renderer needs. Expires a finished override and
    /// consumes pending notices.
    pub fn render(&mut self) -> SessionView {
        self.expire_override();

        let now = self.clock.now();
        let mood = self.current_mood();
        let daily_limit = self.daily_limit().unwrap_or(0.0);
        let spent_today = self.ledger_service.spent_today(&self.ledger, now);
        let percent = spend_ratio_percent(spent_today, daily_limit);
        let pending_kind = self.pending.map(|p| p.kind);

        SessionView {
            phase: self.phase(),
            mood,
            dialogue: mood.dialogue(pending_kind).to_string(),
            pending_kind,
            daily_limit,
            spent_today,
            remaining: daily_limit - spent_today,
            progress_percent: percent.clamp(0.0, 100.0),
            pressure: BudgetPressure::from_percent(percent),
            transactions: self.ledger.transactions.clone(),
            weekly: self.weekly_series(),
            streak: self.streak,
            notices: self.take_notices(),
        }
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// The durable part of the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            profile: self.profile.clone(),
            ledger: self.ledger.clone(),
            streak: self.streak,
        }
    }

    /// Retry saving. Unlike the automatic save after each operation, this
    /// reports the store's error.
    pub fn flush(&mut self) -> Result<(), CoreError> {
        self.store.save(&self.snapshot())?;
        self.dirty = false;
        Ok(())
    }

    /// Returns `true` if the last automatic save failed.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Report rows for every transaction, stamped with the current daily limit.
    #[must_use]
    pub fn export_records(&self) -> Vec<ExportRecord> {
        self.export_service
            .records(&self.ledger.transactions, self.daily_limit().unwrap_or(0.0))
    }

    /// The report as CSV.
    #[must_use]
    pub fn export_csv(&self) -> String {
        self.export_service.to_csv(&self.export_records())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(store: Box<dyn SnapshotStore>, clock: Box<dyn Clock>, settings: Settings) -> Self {
        let snapshot = match store.load() {
            Ok(Some(snapshot)) => {
                info!(
                    store = store.name(),
                    phase = %snapshot.phase(),
                    transactions = snapshot.ledger.len(),
                    "Loaded saved session"
                );
                snapshot
            }
            Ok(None) => {
                debug!(store = store.name(), "No saved session, starting fresh");
                SessionSnapshot::default()
            }
            Err(e) => {
                warn!(store = store.name(), error = %e, "Discarding unreadable saved session");
                SessionSnapshot::default()
            }
        };

        Self {
            profile: snapshot.profile,
            ledger: snapshot.ledger,
            streak: snapshot.streak,
            pending: None,
            mood_override: None,
            notices: VecDeque::new(),
            settings,
            store,
            clock,
            budget_service: BudgetService::new(),
            ledger_service: LedgerService::new(),
            mood_service: MoodService::new(),
            export_service: ExportService::new(),
            dirty: false,
        }
    }

    fn mood_input(&self, now: DateTime<Utc>) -> Option<MoodInput> {
        let profile = self.profile.as_ref()?;
        Some(MoodInput {
            spent_today: self.ledger_service.spent_today(&self.ledger, now),
            daily_limit: profile.daily_budget_limit,
            pending: self.pending,
            override_mood: self
                .mood_override
                .filter(|o| o.is_active(now))
                .map(|o| o.mood),
        })
    }

    /// Schedule an override, replacing any that is still running.
    fn start_override(&mut self, mood: Mood, now: DateTime<Utc>) {
        let expires_at = now + self.settings.euphoric_override();
        self.mood_override = Some(MoodOverride { mood, expires_at });
        debug!(%mood, %expires_at, "Mood override scheduled");
    }

    fn set_daily_limit(&mut self, limit: f64) {
        if let Some(profile) = self.profile.as_mut() {
            profile.daily_budget_limit = limit.max(0.0);
        }
    }

    fn days_in_current_month(&self) -> u32 {
        days_in_month(self.clock.now().with_timezone(&Local).date_naive())
    }

    fn default_description(&self, kind: TransactionKind) -> &str {
        match kind {
            TransactionKind::Income => &self.settings.income_description,
            TransactionKind::Expense => &self.settings.expense_description,
        }
    }

    fn notify_error(&mut self, error: &CoreError) {
        let message = match error {
            CoreError::NegativeBudget { .. } => MSG_NEGATIVE_BUDGET,
            e if e.is_user_facing() => MSG_INVALID_NUMBERS,
            _ => return,
        };
        self.notices.push_back(Notice::error(message));
    }

    fn persist(&mut self) {
        let snapshot = self.snapshot();
        match self.store.save(&snapshot) {
            Ok(()) => self.dirty = false,
            Err(e) => {
                warn!(store = self.store.name(), error = %e, "Failed to save session");
                self.dirty = true;
            }
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
