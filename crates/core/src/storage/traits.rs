use crate::errors::CoreError;
use crate::models::session::SessionSnapshot;

/// Where session snapshots live between runs.
///
/// The session only talks to this trait, so the backing medium (a file,
/// browser storage, memory in tests) can be swapped without touching the
/// engine. Errors are reported, and the session decides how to survive them.
pub trait SnapshotStore {
    /// Human-readable name of this store (for logs).
    fn name(&self) -> &str;

    /// Load the last saved snapshot. `Ok(None)` means nothing was saved yet.
    fn load(&self) -> Result<Option<SessionSnapshot>, CoreError>;

    /// Persist a snapshot, replacing any previous one.
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), CoreError>;

    /// Forget the saved snapshot.
    fn clear(&mut self) -> Result<(), CoreError>;
}
