use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::CoreError;
use crate::models::session::SessionSnapshot;
use crate::models::settings::Settings;

use super::manager::StorageManager;
use super::traits::SnapshotStore;

/// File extension for snapshot files.
pub const FILE_EXTENSION: &str = "mochi";

/// Stores the snapshot as `<dir>/<storage_key>.mochi` (native only).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>, storage_key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{storage_key}.{FILE_EXTENSION}")),
        }
    }

    /// Store under `dir`, named after `settings.storage_key`.
    pub fn for_settings(dir: impl AsRef<Path>, settings: &Settings) -> Self {
        Self::new(dir, settings.storage_key.trim())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self) -> Result<Option<SessionSnapshot>, CoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        StorageManager::load_from_bytes(&bytes).map(Some)
    }

    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), CoreError> {
        let bytes = StorageManager::save_to_bytes(snapshot)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write to a sibling temp file, then rename into place.
        let tmp = self.path.with_extension(format!("{FILE_EXTENSION}.tmp"));
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "Saved snapshot");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
