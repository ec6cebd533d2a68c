use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{SnapshotFile, TournamentSnapshot};
use crate::errors::{parse_context, store_context, with_parse_context, with_read_context};

/// File-based store of tournament snapshots, one JSON file per key
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Create a new store, creating its directory if needed
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).context("Failed to create snapshot directory")?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save a snapshot under `key`
    pub fn save(&self, key: &str, snapshot: &TournamentSnapshot) -> Result<()> {
        let file_path = self.build_path(key)?;
        self.write_json(&file_path, snapshot)
            .with_context(|| store_context("save", key))?;
        info!("Saved snapshot to store: {}", file_path.display());
        Ok(())
    }

    /// Load a snapshot; `Ok(None)` when the key is unknown
    pub fn load(&self, key: &str) -> Result<Option<TournamentSnapshot>> {
        let file_path = self.build_path(key)?;
        self.read_json_opt(&file_path)
            .with_context(|| store_context("load", key))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.build_path(key).map(|p| p.exists()).unwrap_or(false)
    }

    /// Stored keys, sorted
    pub fn keys(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).context("Failed to list snapshot directory")?;
        let mut keys = Vec::new();

        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_valid_key(stem) {
                    keys.push(stem.to_string());
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    // --- Helper Methods ---

    fn build_path(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            anyhow::bail!("Invalid snapshot key: {:?}", key);
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json).context("Failed to write snapshot file")?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }
}

/// Keys become file names, so only `[A-Za-z0-9_-]` is allowed
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Read a snapshot file in any accepted shape (tournament, division or bare match list)
pub fn read_snapshot_file(path: &Path) -> Result<TournamentSnapshot> {
    let json = with_read_context(fs::read_to_string(path), path)?;
    let file: SnapshotFile = with_parse_context(serde_json::from_str(&json), "snapshot file")
        .with_context(|| parse_context(&path.display().to_string()))?;

    let fallback_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("tournament");
    Ok(file.into_tournament(fallback_name))
}
