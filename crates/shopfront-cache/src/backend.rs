//! Storage backends.
//!
//! Every backend is string-valued, mirroring the browser `Storage` API.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::CacheError;

/// A string-valued key-value store.
pub trait KeyValueStore {
    /// Read the raw text stored under `key`.
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store raw text under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// All keys currently stored.
    fn keys(&self) -> Result<Vec<String>, CacheError>;

    /// Check whether `key` is present.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get_raw(key)?.is_some())
    }
}

/// In-memory backend. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::StoreError("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

/// File backend: one JSON object mapping keys to stored text.
///
/// The document is re-read on every access and rewritten through a
/// temporary file, so several handles on the same path stay consistent
/// within one process.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open (or prepare to create) the store at `path`.
    ///
    /// Parent directories are created eagerly; the file itself is written
    /// on the first `set_raw`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CacheError::OpenError(format!("{}: {}", parent.display(), e))
                })?;
            }
        }
        Ok(Self { path })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, CacheError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&text) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // Same as a wiped browser storage: start over.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "storage document is unreadable, treating it as empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        let text = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.read()?.remove(key))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut entries = self.read()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.read()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.read()?.into_keys().collect())
    }
}

/// Browser `window.localStorage` backend.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Open the page's local storage.
    pub fn open() -> Result<Self, CacheError> {
        let window = web_sys::window()
            .ok_or_else(|| CacheError::OpenError("window is unavailable".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CacheError::OpenError(format!("{e:?}")))?
            .ok_or_else(|| CacheError::OpenError("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.storage
            .get_item(key)
            .map_err(|e| CacheError::StoreError(format!("{e:?}")))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| CacheError::StoreError(format!("{e:?}")))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.storage
            .remove_item(key)
            .map_err(|e| CacheError::StoreError(format!("{e:?}")))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let len = self
            .storage
            .length()
            .map_err(|e| CacheError::StoreError(format!("{e:?}")))?;
        let mut keys = Vec::with_capacity(len as usize);
        for index in 0..len {
            if let Some(key) = self
                .storage
                .key(index)
                .map_err(|e| CacheError::StoreError(format!("{e:?}")))?
            {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
