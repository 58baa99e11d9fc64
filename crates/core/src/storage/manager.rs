use crate::errors::CoreError;
use crate::models::session::SessionSnapshot;

use super::format;

/// High-level snapshot encoding: binary envelope for storage, JSON for
/// inspection and the key-value form.
pub struct StorageManager;

impl StorageManager {
    /// Flow: SessionSnapshot → bincode → MOCH envelope bytes
    pub fn save_to_bytes(snapshot: &SessionSnapshot) -> Result<Vec<u8>, CoreError> {
        let payload = bincode::serialize(snapshot)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))?;
        Ok(format::write_file(format::CURRENT_VERSION, &payload))
    }

    /// Flow: MOCH envelope bytes → parse header → bincode → SessionSnapshot
    pub fn load_from_bytes(data: &[u8]) -> Result<SessionSnapshot, CoreError> {
        let (_header, payload) = format::read_file(data)?;
        let snapshot: SessionSnapshot = bincode::deserialize(payload)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize snapshot: {e}")))?;
        Self::check(&snapshot)?;
        Ok(snapshot)
    }

    /// Human-readable snapshot.
    pub fn to_json(snapshot: &SessionSnapshot) -> Result<String, CoreError> {
        serde_json::to_string_pretty(snapshot)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot to JSON: {e}")))
    }

    pub fn from_json(json: &str) -> Result<SessionSnapshot, CoreError> {
        let snapshot: SessionSnapshot = serde_json::from_str(json)?;
        Self::check(&snapshot)?;
        Ok(snapshot)
    }

    /// Reject snapshots that decode fine but break engine invariants.
    fn check(snapshot: &SessionSnapshot) -> Result<(), CoreError> {
        if let Some(profile) = &snapshot.profile {
            if !profile.daily_budget_limit.is_finite() || profile.daily_budget_limit < 0.0 {
                return Err(CoreError::Deserialization(format!(
                    "Invalid daily budget limit in snapshot: {}",
                    profile.daily_budget_limit
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for t in &snapshot.ledger.transactions {
            if !t.amount.is_finite() || t.amount <= 0.0 {
                return Err(CoreError::Deserialization(format!(
                    "Invalid amount {} for transaction {}",
                    t.amount, t.id
                )));
            }
            if !seen.insert(t.id) {
                return Err(CoreError::Deserialization(format!(
                    "Duplicate transaction id {} in snapshot",
                    t.id
                )));
            }
        }
        Ok(())
    }
}
