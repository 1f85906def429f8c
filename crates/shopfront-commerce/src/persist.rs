//! Storage keys and hydration shared by the persisted stores.

use serde::de::DeserializeOwned;
use shopfront_cache::{cache_key, Cache, KeyValueStore};

/// Default key namespace.
pub const DEFAULT_NAMESPACE: &str = "shopfront";

/// Fixed keys the stores persist under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub cart: String,
    pub wishlist: String,
    pub currency: String,
}

impl StorageKeys {
    /// Keys under a namespace, e.g. `shopfront:cart`.
    pub fn new(namespace: &str) -> Self {
        Self {
            cart: cache_key!(namespace, "cart"),
            wishlist: cache_key!(namespace, "wishlist"),
            currency: cache_key!(namespace, "currency"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

/// Read `key`, falling back to `T::default()` when it is missing or
/// unreadable. Unreadable state is logged and left for the next write to
/// overwrite.
pub(crate) fn load_or_default<S, T>(cache: &Cache<S>, key: &str) -> T
where
    S: KeyValueStore,
    T: DeserializeOwned + Default,
{
    match cache.get::<T>(key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding unreadable persisted state");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.cart, "shopfront:cart");
        assert_eq!(keys.wishlist, "shopfront:wishlist");
        assert_eq!(keys.currency, "shopfront:currency");
    }

    #[test]
    fn test_load_or_default_on_garbage() {
        let cache = Cache::in_memory();
        cache.store().set_raw("k", "[1, 2,").unwrap();
        let value: Vec<u32> = load_or_default(&cache, "k");
        assert!(value.is_empty());
    }

    #[test]
    fn test_load_or_default_present() {
        let cache = Cache::in_memory();
        cache.set("k", &vec![1u32, 2]).unwrap();
        let value: Vec<u32> = load_or_default(&cache, "k");
        assert_eq!(value, vec![1, 2]);
    }
}
