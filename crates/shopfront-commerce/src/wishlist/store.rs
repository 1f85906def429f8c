//! Persisted wishlist store.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::persist::{load_or_default, StorageKeys};
use crate::wishlist::{WishlistAction, WishlistEntry, WishlistState};
use shopfront_cache::{Cache, KeyValueStore};

/// The wishlist plus the storage handle it is saved to.
#[derive(Debug, Clone)]
pub struct WishlistStore<S> {
    cache: Cache<S>,
    key: String,
    state: WishlistState,
}

impl<S: KeyValueStore> WishlistStore<S> {
    /// Hydrate the wishlist from storage; malformed data yields an empty list.
    pub fn load(cache: Cache<S>, keys: &StorageKeys) -> Self {
        let entries: Vec<WishlistEntry> = load_or_default(&cache, &keys.wishlist);
        let state = WishlistState::from_entries(entries);
        tracing::debug!(entries = state.count(), "wishlist hydrated");
        Self {
            cache,
            key: keys.wishlist.clone(),
            state,
        }
    }

    pub fn state(&self) -> &WishlistState {
        &self.state
    }

    /// Apply an action and persist the result.
    pub fn dispatch(&mut self, action: WishlistAction) -> Result<(), CommerceError> {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
        self.persist()
    }

    /// Add a product; no-op if present. Returns whether it was added.
    pub fn add(&mut self, product: Product) -> Result<bool, CommerceError> {
        let added = self.state.add(product);
        self.persist()?;
        Ok(added)
    }

    pub fn remove(&mut self, product_id: &ProductId) -> Result<bool, CommerceError> {
        let removed = self.state.remove(product_id);
        self.persist()?;
        Ok(removed)
    }

    /// Returns whether the product is listed afterwards.
    pub fn toggle(&mut self, product: Product) -> Result<bool, CommerceError> {
        let listed = self.state.toggle(product);
        self.persist()?;
        Ok(listed)
    }

    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.state.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), CommerceError> {
        self.cache.set(&self.key, self.state.entries()).map_err(|e| {
            tracing::warn!(key = %self.key, error = %e, "failed to persist wishlist");
            CommerceError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_add_twice_persists_one_entry() {
        let cache = Cache::in_memory();
        let keys = StorageKeys::default();
        let mut store = WishlistStore::load(cache.clone(), &keys);
        let tee = Product::new("tee", "Tee", Money::usd(2000));

        assert!(store.add(tee.clone()).unwrap());
        assert!(!store.add(tee).unwrap());

        let reloaded = WishlistStore::load(cache, &keys);
        assert_eq!(reloaded.state().count(), 1);
    }

    #[test]
    fn test_malformed_storage_gives_empty_wishlist() {
        let cache = Cache::in_memory();
        let keys = StorageKeys::default();
        cache.set(&keys.wishlist, &42).unwrap();

        let store = WishlistStore::load(cache, &keys);
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_dispatch_persists() {
        let cache = Cache::in_memory();
        let keys = StorageKeys::default();
        let mut store = WishlistStore::load(cache.clone(), &keys);

        store
            .dispatch(WishlistAction::Toggle(Product::new("mug", "Mug", Money::usd(1200))))
            .unwrap();
        let stored: Vec<WishlistEntry> = cache.get(&keys.wishlist).unwrap().unwrap();
        assert_eq!(stored.len(), 1);
    }
}
