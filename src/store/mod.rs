//! Session persistence boundary.
//!
//! The core never touches storage directly; it hands a [`SessionSnapshot`]
//! to a [`SnapshotStore`] and reads one back on startup. An absent snapshot
//! means "construct the default seed tree".

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::fs::NodeSnapshot;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Complete serializable session state: the tree, the cursor path and the
/// command history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tree: NodeSnapshot,
    pub cwd: String,
    #[serde(default)]
    pub history: Vec<String>,
}

/// Snapshot save/load boundary. Implementations may retry or buffer
/// internally; the core treats a call as single-shot.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError>;

    async fn load(&self) -> Result<Option<SessionSnapshot>, StoreError>;
}

/// Keeps the latest snapshot in memory. The default store; also what tests
/// use to observe persistence calls.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<SessionSnapshot>>,
    saves: RwLock<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing snapshot.
    pub fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            slot: RwLock::new(Some(snapshot)),
            saves: RwLock::new(0),
        }
    }

    /// How many times `save` has been called.
    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        *self.slot.write().await = Some(snapshot.clone());
        *self.saves.write().await += 1;
        Ok(())
    }

    async fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        Ok(self.slot.read().await.clone())
    }
}

/// Persists the snapshot as pretty-printed JSON at a fixed path.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}

// ============================================================================
// Tests
// ============================================================================
