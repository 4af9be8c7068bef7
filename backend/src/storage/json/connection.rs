use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::storage::traits::Connection;
use super::transaction_repository::TransactionRepository;

/// JsonConnection is a synchronous key-value store over a data directory.
///
/// Each key is stored as `<key>.json` inside the base directory. Values are
/// cached in memory on first read and every write goes to the cache before
/// it goes to disk: when the disk write fails the caller gets the error, but
/// reads keep seeing the committed in-memory value.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
    cache: Arc<Mutex<HashMap<String, String>>>,
}

impl JsonConnection {
    /// Create a new connection with a base directory, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
        }

        info!("Opened data directory: {}", base_path.display());

        Ok(Self {
            base_directory: base_path,
            cache: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// File path backing a storage key
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }

    /// Read the value stored under `key`, if any.
    /// Falls back to the backing file when the key has not been read yet.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let mut cache = self.cache.lock().unwrap();

        if let Some(value) = cache.get(key) {
            return Ok(Some(value.clone()));
        }

        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let value = match fs::read_to_string(&path) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Err(e).with_context(|| format!("Failed to read storage key '{}'", key));
            }
        };

        cache.insert(key.to_string(), value.clone());
        Ok(Some(value))
    }

    /// Store `value` under `key`.
    ///
    /// The in-memory value is committed first; a failed disk write surfaces
    /// as an error without rolling the memory state back.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        {
            let mut cache = self.cache.lock().unwrap();
            cache.insert(key.to_string(), value.to_string());
        }

        let path = self.key_path(key);
        fs::write(&path, value)
            .with_context(|| format!("Failed to persist storage key '{}' to {}", key, path.display()))
    }

    /// Remove `key` from the store.
    /// Returns true if a value existed in memory or on disk.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let had_cached = {
            let mut cache = self.cache.lock().unwrap();
            cache.remove(key).is_some()
        };

        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove storage key '{}'", key))?;
            return Ok(true);
        }

        Ok(had_cached)
    }
}

impl Connection for JsonConnection {
    type TransactionRepository = TransactionRepository;

    fn create_transaction_repository(&self) -> Self::TransactionRepository {
        TransactionRepository::new(self.clone())
    }
}
