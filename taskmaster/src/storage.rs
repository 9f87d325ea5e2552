//! File-backed key-value storage for tasks and the theme preference.
//!
//! Each storage slot is a single file under the data directory (default
//! `~/.local/share/taskmaster`). The task collection lives in one slot as a
//! JSON blob that is overwritten entirely on every save; the theme
//! preference lives in its own slot. A missing or malformed task blob
//! degrades to an empty collection (logged, never fatal).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use taskmaster_core::codec::{self, CodecError};
use taskmaster_core::task::Task;

use crate::ui::theme::ThemeKind;

/// Storage slot holding the serialized task collection.
pub const TASKS_KEY: &str = "taskmaster-tasks";

/// Storage slot holding the theme preference (`"light"` / `"dark"`).
pub const THEME_KEY: &str = "theme";

/// Default export file name, placed in the data directory unless configured
/// otherwise.
pub const EXPORT_FILE_NAME: &str = "taskmaster-backup.json";

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to read a storage slot or import file.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write a storage slot or export file.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The blob could not be encoded or decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Could not determine the user's data directory.
    #[error("could not determine data directory (no HOME or XDG_DATA_HOME)")]
    NoDataDir,
}

/// File-backed storage rooted at a data directory.
#[derive(Debug)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Opens storage rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the directory cannot be created.
    pub fn open(root: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&root).map_err(|e| StorageError::Write {
            path: root.clone(),
            source: e,
        })?;
        Ok(Self { root })
    }

    /// Returns the default data directory (`<data_dir>/taskmaster`).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoDataDir`] if the platform data directory
    /// cannot be determined.
    pub fn default_dir() -> Result<PathBuf, StorageError> {
        dirs::data_dir()
            .map(|d| d.join("taskmaster"))
            .ok_or(StorageError::NoDataDir)
    }

    /// Returns the root directory this storage writes under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Serializes the whole collection into the tasks slot, overwriting the
    /// prior blob entirely.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if encoding or the write fails. The caller
    /// keeps its in-memory collection either way; a save failure does not
    /// roll back the operation that triggered it.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let blob = codec::encode(tasks)?;
        self.write_slot(TASKS_KEY, &blob)
    }

    /// Loads the task collection from the tasks slot.
    ///
    /// An absent slot yields an empty collection. A malformed or unreadable
    /// blob is logged and also yields an empty collection; load never fails
    /// the startup path.
    #[must_use]
    pub fn load_tasks(&self) -> Vec<Task> {
        match self.read_slot(TASKS_KEY) {
            Ok(Some(blob)) => match codec::decode(&blob) {
                Ok(tasks) => tasks,
                Err(e) => {
                    tracing::warn!("malformed task blob, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("could not read task blob, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Persists the theme preference.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the slot cannot be written.
    pub fn save_theme(&self, kind: ThemeKind) -> Result<(), StorageError> {
        self.write_slot(THEME_KEY, kind.as_str())
    }

    /// Loads the theme preference; absent or unrecognized values default to
    /// light.
    #[must_use]
    pub fn load_theme(&self) -> ThemeKind {
        match self.read_slot(THEME_KEY) {
            Ok(Some(value)) => ThemeKind::from_slot_value(&value),
            Ok(None) => ThemeKind::Light,
            Err(e) => {
                tracing::warn!("could not read theme slot, using light: {e}");
                ThemeKind::Light
            }
        }
    }

    /// Default export path: `<root>/taskmaster-backup.json`.
    #[must_use]
    pub fn default_export_path(&self) -> PathBuf {
        self.root.join(EXPORT_FILE_NAME)
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn write_slot(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        fs::write(&path, contents).map_err(|e| StorageError::Write { path, source: e })
    }

    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read { path, source: e }),
        }
    }
}

/// Writes the collection to `path` as 2-space-indented JSON.
///
/// # Errors
///
/// Returns [`StorageError`] if encoding or the write fails.
pub fn export_to(path: &Path, tasks: &[Task]) -> Result<(), StorageError> {
    let json = codec::encode_pretty(tasks)?;
    fs::write(path, json).map_err(|e| StorageError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reads and parses a task collection from a JSON file.
///
/// # Errors
///
/// Returns [`StorageError`] if the file cannot be read or parsed; the
/// caller's existing collection is untouched.
pub fn import_from(path: &Path) -> Result<Vec<Task>, StorageError> {
    let json = fs::read_to_string(path).map_err(|e| StorageError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(codec::decode(&json)?)
}
