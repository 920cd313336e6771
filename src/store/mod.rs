//! JSON snapshot persistence.
//!
//! The portal persists its entire state as one JSON document and writes by
//! replacing whole collections. [`SnapshotStore`] isolates that contract
//! behind a trait; [`JsonFileStore`] implements it over a `data.json` file
//! plus an append-only backup directory. Every replace first copies the
//! current snapshot into a timestamped backup named after the collection
//! that changed and the actor who changed it.
//!
//! Last-write-wins is the accepted concurrency model; there is no locking
//! and no transaction beyond the single file write. The computation engines
//! never touch the store.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Notification, User};

/// The portal's full persisted state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalSnapshot {
    /// All registered users.
    #[serde(default)]
    pub users: Vec<User>,
    /// All attendance records, at most one per (user, date).
    #[serde(default)]
    pub attendance_records: Vec<AttendanceRecord>,
    /// All system notifications.
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// Which collection a replace touched, for the backup file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    /// The user list.
    Users,
    /// The attendance records.
    AttendanceRecords,
    /// The notifications.
    Notifications,
}

impl CollectionKind {
    /// Tag used in backup file names.
    pub fn tag(&self) -> &'static str {
        match self {
            CollectionKind::Users => "USERS",
            CollectionKind::AttendanceRecords => "ATTENDANCE",
            CollectionKind::Notifications => "NOTIFICATIONS",
        }
    }
}

/// Replace-whole-collection persistence for the portal snapshot.
pub trait SnapshotStore {
    /// Loads the current snapshot. A store that has never been written
    /// yields the empty snapshot.
    fn load(&self) -> EngineResult<PortalSnapshot>;

    /// Persists a new snapshot, backing up the previous one first. The
    /// collection and actor only label the backup; the whole snapshot is
    /// always written.
    fn replace(
        &self,
        snapshot: &PortalSnapshot,
        collection: CollectionKind,
        actor: &str,
    ) -> EngineResult<()>;
}

/// [`SnapshotStore`] over a single `data.json` file.
///
/// Backups land under `<root>/backups/<YYYY-MM-DD>/` as
/// `<YYYYMMDDHHMMSS>_<KIND>_by_<actor>.json`, one per replace, never
/// deleted by this crate.
pub struct JsonFileStore {
    data_path: PathBuf,
    backup_root: PathBuf,
}

fn store_error(path: &Path, err: impl std::fmt::Display) -> EngineError {
    EngineError::StoreError {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

impl JsonFileStore {
    /// Creates a store rooted at the given directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            data_path: root.join("data.json"),
            backup_root: root.join("backups"),
        }
    }

    /// Path of the snapshot file.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    fn backup_current(&self, collection: CollectionKind, actor: &str) -> EngineResult<()> {
        if !self.data_path.exists() {
            return Ok(());
        }
        let current =
            fs::read(&self.data_path).map_err(|e| store_error(&self.data_path, e))?;

        let now = Utc::now();
        let day_dir = self.backup_root.join(now.format("%Y-%m-%d").to_string());
        fs::create_dir_all(&day_dir).map_err(|e| store_error(&day_dir, e))?;

        let name = format!(
            "{}_{}_by_{}.json",
            now.format("%Y%m%d%H%M%S"),
            collection.tag(),
            actor
        );
        let backup_path = day_dir.join(name);
        fs::write(&backup_path, current).map_err(|e| store_error(&backup_path, e))?;
        debug!(backup = %backup_path.display(), "snapshot backed up");
        Ok(())
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> EngineResult<PortalSnapshot> {
        if !self.data_path.exists() {
            return Ok(PortalSnapshot::default());
        }
        let raw = fs::read_to_string(&self.data_path)
            .map_err(|e| store_error(&self.data_path, e))?;
        serde_json::from_str(&raw).map_err(|e| store_error(&self.data_path, e))
    }

    fn replace(
        &self,
        snapshot: &PortalSnapshot,
        collection: CollectionKind,
        actor: &str,
    ) -> EngineResult<()> {
        self.backup_current(collection, actor)?;

        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent).map_err(|e| store_error(parent, e))?;
        }
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| store_error(&self.data_path, e))?;
        fs::write(&self.data_path, json).map_err(|e| store_error(&self.data_path, e))?;
        debug!(
            collection = collection.tag(),
            actor, "snapshot replaced"
        );
        Ok(())
    }
}
