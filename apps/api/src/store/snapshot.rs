//! JSON snapshot persistence for the store.
//!
//! File layout: `{"version": 1, "store": {...}}`. Writes go to a sibling temp
//! file that is then renamed over the target, so a crash never leaves a
//! half-written snapshot behind.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::store::Store;

pub const SNAPSHOT_VERSION: u64 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u64,
    store: &'a Store,
}

#[derive(Deserialize)]
struct SnapshotIn {
    store: Store,
}

#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Loads the stored state. A missing file or an unknown version gives an empty store;
    /// a file that is not valid JSON is an error.
    pub async fn load(&self) -> Result<Store> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No snapshot at {}, starting empty", self.path.display());
                return Ok(Store::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read snapshot {}", self.path.display()))
            }
        };

        let value: Value = serde_json::from_str(&raw)
            .with_context(|| format!("Snapshot {} is not valid JSON", self.path.display()))?;

        match value.get("version").and_then(Value::as_u64) {
            Some(SNAPSHOT_VERSION) => {}
            other => {
                warn!(
                    "Ignoring snapshot {} with unsupported version {:?}, starting empty",
                    self.path.display(),
                    other
                );
                return Ok(Store::default());
            }
        }

        let snapshot: SnapshotIn = serde_json::from_value(value)
            .with_context(|| format!("Failed to decode snapshot {}", self.path.display()))?;
        info!("Loaded snapshot from {}", self.path.display());
        Ok(snapshot.store)
    }

    pub async fn save(&self, store: &Store) -> Result<()> {
        let body = serde_json::to_vec_pretty(&SnapshotOut {
            version: SNAPSHOT_VERSION,
            store,
        })
        .context("Failed to serialize snapshot")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &body)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to move snapshot into {}", self.path.display()))?;

        debug!("Snapshot written to {} ({} bytes)", self.path.display(), body.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::{ChatMessage, Settings};

    fn make_store() -> Store {
        let profile = serde_json::from_str(
            r#"{"id": "student-1", "name": "Ada", "interests": ["Data"], "currentSkills": ["SQL"]}"#,
        )
        .unwrap();
        Store::default()
            .with_profile(profile)
            .with_chat_message(ChatMessage::user("What should I learn?"))
            .with_settings(Settings { demo_mode: true })
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("nested").join("state.json"));
        let store = make_store();

        file.save(&store).await.unwrap();
        assert!(!file.temp_path().exists());
        assert_eq!(file.load().await.unwrap(), store);
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("absent.json"));
        assert_eq!(file.load().await.unwrap(), Store::default());
    }

    #[tokio::test]
    async fn test_unknown_version_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"version": 2, "store": {"profile": {"name": "Ada"}}}"#).unwrap();
        assert_eq!(SnapshotFile::new(&path).load().await.unwrap(), Store::default());

        std::fs::write(&path, r#"{"store": {}}"#).unwrap();
        assert_eq!(SnapshotFile::new(&path).load().await.unwrap(), Store::default());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(SnapshotFile::new(&path).load().await.is_err());
    }

    #[tokio::test]
    async fn test_written_file_carries_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        SnapshotFile::new(&path).save(&make_store()).await.unwrap();

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["store"]["profile"]["name"], "Ada");
        assert_eq!(value["store"]["settings"]["demoMode"], true);
    }
}
