// Storage backend abstraction
// Durable key/value storage holding the persisted session

pub mod file;
pub mod memory;

use crate::models::StorageConfig;
use std::sync::Arc;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key holding the session token
pub const TOKEN_KEY: &str = "auth_token";

/// Key holding the JSON-serialized user
pub const USER_KEY: &str = "current_user";

/// Key/value storage backend trait
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Write several keys as one unit
    fn set_items(&self, items: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, value) in items {
            self.set_item(key, value)?;
        }
        Ok(())
    }

    /// Remove several keys as one unit
    fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        for key in keys {
            self.remove_item(key)?;
        }
        Ok(())
    }
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Factory function to create storage backend based on configuration
pub fn create_storage_backend(
    config: &StorageConfig,
) -> Result<Arc<dyn KeyValueStorage>, StorageError> {
    match config {
        StorageConfig::Memory => Ok(Arc::new(MemoryStorage::new())),
        StorageConfig::File { path } => Ok(Arc::new(FileStorage::open(path)?)),
    }
}
