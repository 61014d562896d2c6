//! Persistence bridge: mirrors a restricted projection of the application
//! state to durable client-local storage.
//!
//! Only `currentPage`, `sidebarCollapsed`, and `settings` are persisted;
//! the session user and the notification list are session-scoped and never
//! written. Absence or parse failure of the stored blob means "no prior
//! state", never an error surfaced to the user.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::models::Settings;
use crate::state::{AppState, StatePatch};

/// The projection of [`AppState`] that survives across sessions.
///
/// Wire shape: `{ "currentPage": ..., "sidebarCollapsed": ..., "settings": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub current_page: String,
    pub sidebar_collapsed: bool,
    pub settings: Settings,
}

impl PersistedState {
    /// Projects the persistable subset out of a full state snapshot.
    #[must_use]
    pub fn project(state: &AppState) -> Self {
        Self {
            current_page: state.current_page.clone(),
            sidebar_collapsed: state.sidebar_collapsed,
            settings: state.settings.clone(),
        }
    }
}

impl From<PersistedState> for StatePatch {
    fn from(persisted: PersistedState) -> Self {
        StatePatch {
            current_page: Some(persisted.current_page),
            sidebar_collapsed: Some(persisted.sidebar_collapsed),
            settings: Some(persisted.settings),
            ..StatePatch::default()
        }
    }
}

/// Storage backend for the single durable state blob.
///
/// Adapters deal in opaque strings; the store owns the JSON encoding. This
/// keeps backends trivial to swap (file on disk, browser storage behind a
/// shim, in-memory for tests).
pub trait StorageAdapter: Send + Sync {
    /// Read the stored blob. `Ok(None)` means no prior state exists.
    fn load(&self) -> Result<Option<String>>;

    /// Overwrite the stored blob.
    fn save(&self, raw: &str) -> Result<()>;
}

/// File-backed storage: one JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageAdapter for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Storage {
                message: format!("failed to read {}: {e}", self.path.display()),
            }),
        }
    }

    fn save(&self, raw: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, raw).map_err(|e| Error::Storage {
            message: format!("failed to write {}: {e}", self.path.display()),
        })
    }
}

/// In-memory storage slot, shared across clones. Intended for tests and
/// for embedding the store where no durable backend exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self
            .slot
            .lock()
            .map_err(|_| Error::Storage {
                message: "memory storage poisoned".to_string(),
            })?
            .clone())
    }

    fn save(&self, raw: &str) -> Result<()> {
        *self.slot.lock().map_err(|_| Error::Storage {
            message: "memory storage poisoned".to_string(),
        })? = Some(raw.to_string());
        Ok(())
    }
}

/// Encodes the persistable projection of `state` as JSON.
pub fn encode(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string(&PersistedState::project(state))?)
}

/// Decodes a stored blob back into a rehydration patch.
pub fn decode(raw: &str) -> Result<StatePatch> {
    let persisted: PersistedState = serde_json::from_str(raw)?;
    Ok(persisted.into())
}
