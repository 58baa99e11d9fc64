use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Engine configuration. Every field has a default, so a partial JSON
/// document (or none at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How long the EUPHORIC override lasts after income is committed, in milliseconds.
    pub euphoric_override_ms: u64,

    /// Description given to income recorded without one.
    pub income_description: String,

    /// Description given to expenses recorded without one.
    pub expense_description: String,

    /// Key under which the snapshot is persisted (file name used by `FileStore::for_settings`).
    pub storage_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            euphoric_override_ms: 4_000,
            income_description: "Deposit".to_string(),
            expense_description: "Expense".to_string(),
            storage_key: "mochi_feline_budget_v1".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.euphoric_override_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "euphoric_override_ms must be greater than zero".into(),
            ));
        }
        if self.income_description.trim().is_empty() || self.expense_description.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "default transaction descriptions must not be empty".into(),
            ));
        }
        let key = self.storage_key.trim();
        if key.is_empty() || key.contains(['/', '\\']) {
            return Err(CoreError::InvalidConfig(format!(
                "storage_key '{}' must be a non-empty name without path separators",
                self.storage_key
            )));
        }
        Ok(())
    }

    /// Override duration as a chrono duration.
    #[must_use]
    pub fn euphoric_override(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(i64::try_from(self.euphoric_override_ms).unwrap_or(i64::MAX))
    }
}
