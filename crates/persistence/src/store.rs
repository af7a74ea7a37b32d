//! Key-value store underlying every collection.
//!
//! Values are JSON documents addressed by string keys. Two backends exist:
//! - `FileStore`: one `<key>.json` file per key inside a data directory
//! - `MemoryStore`: a mutex-guarded map, for tests and ephemeral deployments
//!
//! The `Store` handle layers typed reads and writes on top of a backend. Reads
//! never fail on bad data: a missing or unparseable value yields the default.
//! Writes surface every failure to the caller.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::keys::{CONFIG_KEY, LEADS_KEY, PAGES_KEY, SEED_MARKER_KEY};
use crate::metrics::StoreTimer;
use crate::seed;

/// Default per-value quota, matching typical browser storage limits.
pub const DEFAULT_MAX_VALUE_BYTES: usize = 5 * 1024 * 1024;

/// Errors raised by the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Value for '{key}' is {size} bytes, exceeding the {limit} byte quota")]
    QuotaExceeded {
        key: String,
        size: usize,
        limit: usize,
    },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Raw string storage addressed by key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

fn check_quota(key: &str, value: &str, limit: usize) -> Result<(), StoreError> {
    if value.len() > limit {
        return Err(StoreError::QuotaExceeded {
            key: key.to_string(),
            size: value.len(),
            limit,
        });
    }
    Ok(())
}

/// File-backed store: one `<key>.json` per key.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    max_value_bytes: usize,
}

impl FileStore {
    /// Opens (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>, max_value_bytes: usize) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            max_value_bytes,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        check_quota(key, value, self.max_value_bytes)?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store. Contents are lost when the process exits.
#[derive(Debug)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    max_value_bytes: usize,
}

impl MemoryStore {
    pub fn new(max_value_bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_value_bytes,
        }
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VALUE_BYTES)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        check_quota(key, value, self.max_value_bytes)?;
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Typed handle over a backend. Cheap to clone; clones share the backend and
/// the write lock.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl Store {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// An empty in-memory store with the default quota.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    /// Reads and deserializes `key`, yielding `T::default()` when the key is
    /// missing or its value does not parse.
    pub fn read<T>(&self, key: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        self.read_or(key, T::default())
    }

    /// Like [`Store::read`], with an explicit fallback.
    pub fn read_or<T>(&self, key: &str, fallback: T) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        let timer = StoreTimer::new("read", key);
        let raw = self.backend.get(key);
        timer.record();

        let Some(raw) = raw? else {
            return Ok(fallback);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key = %key, error = %e, "Stored value is corrupt, using default");
                Ok(fallback)
            }
        }
    }

    /// Serializes and stores `value` under `key`.
    pub fn write<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value)?;
        let timer = StoreTimer::new("write", key);
        let result = self.backend.set(key, &raw);
        timer.record();
        result
    }

    pub fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.backend.get(key)?.is_some())
    }

    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)
    }

    /// Serializes read-modify-write sequences within this process.
    ///
    /// Hold the guard across the read and the write of a mutation.
    pub fn lock_writes(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Writes the seed collections unless the seed marker is already present.
    ///
    /// Returns whether seeding happened. The marker is written last, so a
    /// failed seed is retried on the next start.
    pub fn initialize_if_empty(&self) -> Result<bool, StoreError> {
        let _guard = self.lock_writes()?;

        if self.contains(SEED_MARKER_KEY)? {
            return Ok(false);
        }

        let now = Utc::now();
        let pages = seed::seed_pages(now);
        let leads = seed::seed_leads(now);

        self.write(PAGES_KEY, &pages)?;
        self.write(LEADS_KEY, &leads)?;
        self.write(CONFIG_KEY, &domain::models::SiteConfig::default())?;
        self.write(SEED_MARKER_KEY, &true)?;

        info!(
            pages = pages.len(),
            leads = leads.len(),
            marker = SEED_MARKER_KEY,
            "Store seeded"
        );
        Ok(true)
    }
}
