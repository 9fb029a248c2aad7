//! Key-value store for device settings
//!
//! Values are stored as JSON in a sled tree. Keys are built from scope
//! segments joined with `:` (e.g. `device:has_seen_onboarding`).

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sled::Db;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

/// Scope segment separator
const SEPARATOR: &str = ":";

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
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KvConfig {
    /// Database directory
    pub path: PathBuf,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Flush interval in milliseconds (None flushes only on request)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("creditline_kv.db"),
            cache_capacity: 1024 * 1024, // 1MB
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Configuration for a database directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// JSON key-value store backed by sled
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Open or create a store
    pub fn new(config: KvConfig) -> Result<Self> {
        let db = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression)
            .flush_every_ms(config.flush_every_ms)
            .open()?;

        debug!(path = %config.path.display(), "Opened key-value store");
        Ok(Self { db: Arc::new(db) })
    }

    /// Create a temporary store that is deleted on drop (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Get a value by key
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value by key
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        trace!(key, "Stored value");
        Ok(())
    }

    /// Remove a value by key. Returns whether it existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Get a value by scoped key (e.g., `["device", "theme"]`)
    pub fn get_scoped<T>(&self, scopes: &[&str]) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.get(&scoped_key(scopes)?)
    }

    /// Set a value by scoped key
    pub fn set_scoped<T>(&self, scopes: &[&str], value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.set(&scoped_key(scopes)?, value)
    }

    /// Remove a value by scoped key
    pub fn remove_scoped(&self, scopes: &[&str]) -> Result<bool> {
        self.remove(&scoped_key(scopes)?)
    }

    /// Check if a scoped key exists
    pub fn contains_scoped(&self, scopes: &[&str]) -> Result<bool> {
        self.contains(&scoped_key(scopes)?)
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Clear all data
    pub fn clear(&self) -> Result<()> {
        self.db.clear()?;
        Ok(())
    }

    /// Number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

fn scoped_key(scopes: &[&str]) -> Result<String> {
    if scopes.is_empty() {
        return Err(KvError::InvalidKey("empty scope".to_string()));
    }
    if let Some(bad) = scopes.iter().find(|s| s.is_empty() || s.contains(SEPARATOR)) {
        return Err(KvError::InvalidKey(format!("bad scope segment {bad:?}")));
    }
    Ok(scopes.join(SEPARATOR))
}

/// Scoped key-value store for device-level settings
#[derive(Clone)]
pub struct DeviceStore {
    kv: Arc<KvStore>,
}

impl DeviceStore {
    /// Scope name
    pub const SCOPE: &'static str = "device";

    /// Create a new device store
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// Get a device-level value
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.kv.get_scoped(&[Self::SCOPE, key])
    }

    /// Set a device-level value
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.kv.set_scoped(&[Self::SCOPE, key], value)
    }

    /// Remove a device-level value
    pub fn remove(&self, key: &str) -> Result<bool> {
        self.kv.remove_scoped(&[Self::SCOPE, key])
    }

    /// Check if a device-level key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        self.kv.contains_scoped(&[Self::SCOPE, key])
    }

    /// Persist pending writes
    pub fn flush(&self) -> Result<()> {
        self.kv.flush()
    }
}
