//! Durable client store for shell preferences
//!
//! A small, type-safe key-value store on top of sled. The shell keeps only a
//! handful of device-level preferences here (the UI language being the main
//! one), so the surface is narrow: typed get/set plus the
//! [`PreferenceStore`] seam used by higher layers.

use serde::{de::DeserializeOwned, Serialize};
use sled::Db;
use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Flush interval in milliseconds (None for flush on every write)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "native_shell_kv.db".to_string(),
            cache_capacity: 1024 * 1024, // 1MB, preferences are tiny
            flush_every_ms: None,
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Seam for the durable client store
///
/// Values are plain strings; the language preference is the canonical user.
pub trait PreferenceStore: Send + Sync {
    /// Read a stored preference
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a preference, replacing any previous value
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// sled-backed key-value store
pub struct KvStore {
    db: Arc<Db>,
    flush_on_write: bool,
}

impl KvStore {
    /// Open (or create) a store with the given configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let mut db_config = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity);

        if let Some(ms) = config.flush_every_ms {
            db_config = db_config.flush_every_ms(Some(ms));
        }

        let db = db_config.open()?;
        tracing::debug!("Opened preference store at {}", config.path);

        Ok(Self { db: Arc::new(db), flush_on_write: config.flush_every_ms.is_none() })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db), flush_on_write: false })
    }

    /// Get a value by key
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        validate_key(key)?;
        match self.db.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value by key
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        validate_key(key)?;
        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        if self.flush_on_write {
            self.db.flush()?;
        }
        Ok(())
    }
}

impl PreferenceStore for KvStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, &value)
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(KvError::InvalidKey("key must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let kv = KvStore::in_memory().unwrap();

        kv.set("language", &"en".to_string()).unwrap();

        let value: Option<String> = kv.get("language").unwrap();
        assert_eq!(value, Some("en".to_string()));
    }

    #[test]
    fn test_get_nonexistent() {
        let kv = KvStore::in_memory().unwrap();
        let value: Option<String> = kv.get("nonexistent").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let kv = KvStore::in_memory().unwrap();

        kv.write("language", "ar").unwrap();
        kv.write("language", "en").unwrap();
        assert_eq!(kv.read("language").unwrap(), Some("en".to_string()));
    }

    #[test]
    fn test_empty_key_rejected() {
        let kv = KvStore::in_memory().unwrap();
        let err = kv.set("", &1u8).unwrap_err();
        assert!(matches!(err, KvError::InvalidKey(_)));
    }

    #[test]
    fn test_type_mismatch_is_serialization_error() {
        let kv = KvStore::in_memory().unwrap();
        kv.set("count", &42u32).unwrap();

        let result: Result<Option<Vec<String>>> = kv.get("count");
        assert!(matches!(result, Err(KvError::Serialization(_))));
    }

    #[test]
    fn test_preference_store_trait() {
        let kv = KvStore::in_memory().unwrap();
        let store: &dyn PreferenceStore = &kv;

        store.write("language", "ar").unwrap();
        assert_eq!(store.read("language").unwrap(), Some("ar".to_string()));
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.db");
        let path = path.to_string_lossy().to_string();

        {
            let kv = KvStore::new(KvConfig::new(path.clone())).unwrap();
            kv.write("language", "en").unwrap();
        }

        let kv = KvStore::new(KvConfig::new(path)).unwrap();
        assert_eq!(kv.read("language").unwrap(), Some("en".to_string()));
    }

    #[test]
    fn test_config_builder() {
        let config = KvConfig::new("/tmp/x.db").cache_capacity(4096).flush_every_ms(Some(250));
        assert_eq!(config.path, "/tmp/x.db");
        assert_eq!(config.cache_capacity, 4096);
        assert_eq!(config.flush_every_ms, Some(250));
    }
}
