use crate::{KeyValueStore, StoreError, StoreResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Key/value store persisted as a single JSON object file.
///
/// The whole map is held in memory; every mutation rewrites the file with
/// the atomic write pattern.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// - file missing: starts empty (first launch)
    /// - file unreadable: returns `FileRead`
    /// - file corrupted: backs it up, logs a warning and starts empty
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if !path.exists() {
            info!("No profile cache at {path:?} (first launch)");
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StoreError::file_read(path.clone(), e))?;

        let entries = match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => {
                debug!("Loaded {} cache entries from {path:?}", entries.len());
                entries
            }
            Err(e) => {
                let err = StoreError::corrupted(path.clone(), e.to_string());
                warn!("{err} ({})", err.recovery_hint());
                if let Err(backup_err) = backup_corrupted(&path) {
                    warn!("{backup_err} ({})", backup_err.recovery_hint());
                }
                BTreeMap::new()
            }
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the map using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn persist(&self) -> StoreResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| StoreError::dir_creation(dir.to_path_buf(), e))?;
        }

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("profile.json"));
        let temp_path = self
            .path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

        // Pretty printing for debuggability
        let json = serde_json::to_string_pretty(&self.entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist()
    }
}

/// Backs up a corrupted store file for debugging.
///
/// Renames `<file>` to `<file>.corrupted.{timestamp}`.
pub fn backup_corrupted(path: &Path) -> StoreResult<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let timestamp = chrono::Utc::now().format(DATE_FORMAT);
    let backup_path = path.with_file_name(format!("{file_name}.corrupted.{timestamp}"));

    fs::rename(path, &backup_path).map_err(StoreError::backup_failed)?;

    warn!("Backed up corrupted profile cache to {backup_path:?}");
    Ok(Some(backup_path))
}
