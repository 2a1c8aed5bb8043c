// src/core/preferences.rs

use crate::core::paths::{self, PathError};
use crate::models::PreferenceRecord;
use chrono::{Local, SecondsFormat};
use log::debug;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised while reading or writing the preference record.
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// Nothing has been saved yet.
    #[error("no saved selection at '{0}'")]
    NotFound(PathBuf),
    /// The file or its directory could not be read or written.
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    /// The file does not hold a valid record.
    #[error("Malformed preference file: {0}")]
    Json(#[from] serde_json::Error),
    /// The temporary file could not be moved over the record.
    #[error("Could not replace the preference file: {0}")]
    Persist(#[from] tempfile::PersistError),
    /// No location for the record could be resolved.
    #[error("Path error: {0}")]
    Path(#[from] PathError),
}

/// What to do with the resolved selection once it is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePolicy {
    /// Write the selection. A failed write is reported to the operator as a
    /// warning and the run continues.
    Persist,
    /// Leave the stored record untouched (`--no-save`).
    Skip,
}

impl SavePolicy {
    /// Maps the `--no-save` flag to a policy.
    pub fn from_no_save(no_save: bool) -> Self {
        if no_save { Self::Skip } else { Self::Persist }
    }
}

/// Reads and writes the single preference record of the current user.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Opens the store at the per-user default location.
    pub fn open_default() -> Result<Self, PreferenceError> {
        let path = paths::get_preference_path()?;
        debug!("Preference file: '{}'", path.display());
        Ok(Self { path })
    }

    /// Opens the store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the record with `positions` and the current time.
    ///
    /// Missing parent directories are created. The file is written through a
    /// temporary sibling and renamed into place, readable and writable by the
    /// owner only.
    pub fn save(&self, positions: &[i64]) -> Result<(), PreferenceError> {
        let record = PreferenceRecord {
            last_selections: positions.to_vec(),
            saved_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        };
        let json = serde_json::to_string_pretty(&record)?;

        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        // NamedTempFile is created 0600 on unix.
        let mut temp = NamedTempFile::new_in(&parent)?;
        temp.write_all(json.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        debug!(
            "Saved selection {:?} to '{}'",
            record.last_selections,
            self.path.display()
        );
        Ok(())
    }

    /// Returns the stored 1-based positions.
    ///
    /// # Errors
    /// `NotFound` when nothing was ever saved, `Io` when the file cannot be
    /// read, `Json` when it does not hold a valid record. A valid record with
    /// an empty list is `Ok(vec![])`.
    pub fn load(&self) -> Result<Vec<i64>, PreferenceError> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PreferenceError::NotFound(self.path.clone()),
            _ => PreferenceError::Io(e),
        })?;
        let record: PreferenceRecord = serde_json::from_str(&content)?;
        debug!(
            "Loaded selection {:?} saved at {}",
            record.last_selections, record.saved_at
        );
        Ok(record.last_selections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> PreferenceStore {
        PreferenceStore::at(dir.path().join("nested").join("prefs.json"))
    }

    #[test]
    fn test_save_then_load_returns_same_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[4, 1, 3]).unwrap();
        assert_eq!(store.load().unwrap(), vec![4, 1, 3]);
    }

    #[test]
    fn test_second_save_overwrites_first() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[1, 2, 3, 4]).unwrap();
        store.save(&[2]).unwrap();
        assert_eq!(store.load().unwrap(), vec![2]);
    }

    #[test]
    fn test_saved_file_is_indented_json_with_timestamp() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[2, 4]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\n  \"last_selections\""));
        let record: PreferenceRecord = serde_json::from_str(&content).unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&record.saved_at).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[1]).unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(matches!(store.load(), Err(PreferenceError::NotFound(_))));
    }

    #[test]
    fn test_load_malformed_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();
        let store = PreferenceStore::at(&path);
        assert!(matches!(store.load(), Err(PreferenceError::Json(_))));
    }

    #[test]
    fn test_load_empty_record_is_ok_and_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"last_selections": [], "saved_at": "x"}"#).unwrap();
        assert_eq!(PreferenceStore::at(&path).load().unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_save_policy_from_flag() {
        assert_eq!(SavePolicy::from_no_save(true), SavePolicy::Skip);
        assert_eq!(SavePolicy::from_no_save(false), SavePolicy::Persist);
    }
}
