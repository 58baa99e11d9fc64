use crate::errors::CoreError;
use crate::models::session::SessionSnapshot;

use super::manager::StorageManager;
use super::traits::SnapshotStore;

/// Keeps the encoded snapshot in memory.
///
/// Stores the same bytes a file would hold, so it can be seeded with raw
/// (even corrupted) data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bytes: Option<Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw bytes already "on disk".
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes: Some(bytes) }
    }

    /// Raw bytes of the last save, if any.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Option<SessionSnapshot>, CoreError> {
        self.bytes
            .as_deref()
            .map(StorageManager::load_from_bytes)
            .transpose()
    }

    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), CoreError> {
        self.bytes = Some(StorageManager::save_to_bytes(snapshot)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CoreError> {
        self.bytes = None;
        Ok(())
    }
}
