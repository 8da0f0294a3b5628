//! Metadata storage for sync tracking.
//!
//! This module persists bookkeeping about past sync runs, such as when
//! the materials were last pushed and how many runs have completed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Metadata stored in metadata.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// ISO 8601 timestamp of the last completed sync
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_synced: Option<String>,

    /// Number of completed sync runs
    #[serde(default)]
    pub sync_count: u64,

    /// First completed sync timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_synced: Option<String>,
}

/// Metadata manager for sync tracking
///
/// Manages metadata persistence in ~/.atelier/metadata.json
pub struct MetadataManager {
    metadata_path: PathBuf,
}

impl MetadataManager {
    /// Create a new metadata manager
    pub fn new(config_dir: Option<String>) -> Result<Self> {
        let base_dir = match config_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".atelier"),
        };

        // Create directory if it doesn't exist
        std::fs::create_dir_all(&base_dir)
            .with_context(|| format!("Failed to create config directory: {:?}", base_dir))?;

        let metadata_path = base_dir.join("metadata.json");

        Ok(Self { metadata_path })
    }

    /// Read metadata from disk
    pub fn read_metadata(&self) -> Result<Metadata> {
        if !self.metadata_path.exists() {
            return Ok(Metadata::default());
        }

        let content = std::fs::read_to_string(&self.metadata_path)
            .with_context(|| format!("Failed to read metadata file: {:?}", self.metadata_path))?;

        serde_json::from_str(&content).with_context(|| "Failed to parse metadata JSON")
    }

    /// Write metadata to disk
    pub fn write_metadata(&self, metadata: &Metadata) -> Result<()> {
        let content =
            serde_json::to_string_pretty(metadata).context("Failed to serialize metadata")?;

        std::fs::write(&self.metadata_path, content)
            .with_context(|| format!("Failed to write metadata file: {:?}", self.metadata_path))?;

        debug!("Metadata saved to {:?}", self.metadata_path);
        Ok(())
    }

    /// Record a completed sync run
    ///
    /// - Sets lastSynced to current time
    /// - Increments syncCount
    /// - Sets firstSynced if not already set
    pub fn record_sync(&self) -> Result<()> {
        let mut metadata = self.read_metadata().unwrap_or_else(|e| {
            warn!("Failed to read metadata, starting fresh: {}", e);
            Metadata::default()
        });

        let now = chrono::Utc::now().to_rfc3339();

        metadata.last_synced = Some(now.clone());
        metadata.sync_count += 1;

        if metadata.first_synced.is_none() {
            metadata.first_synced = Some(now);
        }

        self.write_metadata(&metadata)?;

        debug!(
            "Sync recorded: count={}, last_synced={}",
            metadata.sync_count,
            metadata.last_synced.as_deref().unwrap_or("unknown")
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_metadata_manager_new() {
        let tmp = tempdir().unwrap();
        let manager = MetadataManager::new(Some(tmp.path().to_string_lossy().to_string())).unwrap();
        assert!(manager.metadata_path.exists() == false); // File not created until write
    }

    #[test]
    fn test_record_sync() {
        let tmp = tempdir().unwrap();
        let manager = MetadataManager::new(Some(tmp.path().to_string_lossy().to_string())).unwrap();

        // First run
        manager.record_sync().unwrap();
        let metadata = manager.read_metadata().unwrap();
        assert_eq!(metadata.sync_count, 1);
        assert!(metadata.last_synced.is_some());
        assert!(metadata.first_synced.is_some());

        // Second run
        manager.record_sync().unwrap();
        let metadata = manager.read_metadata().unwrap();
        assert_eq!(metadata.sync_count, 2);
        assert!(metadata.first_synced.is_some());
    }

    #[test]
    fn test_read_nonexistent_metadata() {
        let tmp = tempdir().unwrap();
        let manager = MetadataManager::new(Some(tmp.path().to_string_lossy().to_string())).unwrap();

        let metadata = manager.read_metadata().unwrap();
        assert_eq!(metadata.sync_count, 0);
        assert!(metadata.last_synced.is_none());
    }
}
