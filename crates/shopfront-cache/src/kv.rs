//! Typed cache wrapper with automatic serialization.

use crate::{CacheError, KeyValueStore, MemoryStore};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over a string-valued [`KeyValueStore`].
///
/// Values are stored as JSON text, the same way a browser app stores them
/// in `localStorage`. Cloning a cache clones the backend handle, so clones
/// of a [`MemoryStore`] or [`FileStore`](crate::FileStore) see the same data.
#[derive(Debug, Clone, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and
    /// [`CacheError::Malformed`] if it exists but doesn't decode as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let lines: Option<Vec<CartLine>> = cache.get("shopfront:cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get_raw(key)? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|source| CacheError::Malformed {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("shopfront:cart", &lines)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let text = serde_json::to_string(value)?;
        self.store.set_raw(key, &text)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// Borrow the underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl Cache<MemoryStore> {
    /// A cache over a fresh in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```
/// use shopfront_cache::cache_key;
///
/// let key = cache_key!("shopfront", "cart");
/// assert_eq!(key, "shopfront:cart");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
