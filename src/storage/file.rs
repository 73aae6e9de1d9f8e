// File-backed storage backend implementation
// Keeps every key in one JSON object; each write replaces the file atomically

use super::{KeyValueStorage, StorageError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// JSON file storage
pub struct FileStorage {
    path: PathBuf,
    items: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open the storage file, starting empty when it does not exist yet.
    ///
    /// A file that is not a JSON object of string values is discarded and
    /// rewritten empty; only I/O failures are returned.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        let (items, discarded): (HashMap<String, String>, bool) = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                (HashMap::new(), false)
            } else {
                match serde_json::from_str(&contents) {
                    Ok(items) => (items, false),
                    Err(e) => {
                        warn!(
                            "Discarding unreadable storage file {}: {}",
                            path.display(),
                            e
                        );
                        (HashMap::new(), true)
                    }
                }
            }
        } else {
            (HashMap::new(), false)
        };

        let count = items.len();
        let storage = Self {
            path,
            items: Mutex::new(items),
        };

        if discarded && let Err(e) = storage.persist(&HashMap::new()) {
            warn!(
                "Failed to reset storage file {}: {}",
                storage.path.display(),
                e
            );
        }

        info!(
            "Opened file storage at {} ({} key(s))",
            storage.path.display(),
            count
        );

        Ok(storage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the map, persist it, then keep it
    fn update<F>(&self, change: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let mut items = self
            .items
            .lock()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;

        let mut next = items.clone();
        change(&mut next);
        self.persist(&next)?;
        *items = next;
        Ok(())
    }

    fn persist(&self, items: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_vec_pretty(items)?)?;
        fs::rename(&tmp, &self.path)?;

        debug!("Persisted {} key(s) to {}", items.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .lock()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.remove(key);
        })
    }

    fn set_items(&self, pairs: &[(&str, &str)]) -> Result<(), StorageError> {
        self.update(|items| {
            for (key, value) in pairs {
                items.insert(key.to_string(), value.to_string());
            }
        })
    }

    fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.update(|items| {
            for key in keys {
                items.remove(*key);
            }
        })
    }
}
