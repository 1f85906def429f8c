//! Persisted cart store.

use crate::cart::{CartAction, CartLine, CartState, CartTotals, InventoryPolicy, PricingRules};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::LineId;
use crate::persist::{load_or_default, StorageKeys};
use shopfront_cache::{Cache, KeyValueStore};

/// The cart plus the storage handle it is saved to.
///
/// Each mutation runs the pure transition on [`CartState`] first and then
/// writes the full line list under the cart key.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    cache: Cache<S>,
    key: String,
    state: CartState,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Hydrate the cart from storage.
    ///
    /// Missing or malformed data yields an empty cart.
    pub fn load(cache: Cache<S>, keys: &StorageKeys, policy: InventoryPolicy) -> Self {
        let lines: Vec<CartLine> = load_or_default(&cache, &keys.cart);
        let state = CartState::from_lines(lines, policy);
        tracing::debug!(lines = state.len(), "cart hydrated");
        Self {
            cache,
            key: keys.cart.clone(),
            state,
        }
    }

    /// Current cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply an action and persist the result.
    pub fn dispatch(&mut self, action: CartAction) -> Result<(), CommerceError> {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
        self.persist()
    }

    /// See [`CartState::add_item`].
    pub fn add_item(
        &mut self,
        product: Product,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    ) -> Result<Option<LineId>, CommerceError> {
        let line_id = self.state.add_item(product, quantity, size, color);
        self.persist()?;
        Ok(line_id)
    }

    /// See [`CartState::remove_item`].
    pub fn remove_item(&mut self, line_id: &LineId) -> Result<bool, CommerceError> {
        let removed = self.state.remove_item(line_id);
        self.persist()?;
        Ok(removed)
    }

    /// See [`CartState::set_quantity`].
    pub fn set_quantity(&mut self, line_id: &LineId, quantity: i64) -> Result<bool, CommerceError> {
        let changed = self.state.set_quantity(line_id, quantity);
        self.persist()?;
        Ok(changed)
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.state.clear();
        self.persist()
    }

    /// Totals for the current lines.
    pub fn totals(&self, rules: &PricingRules) -> Result<CartTotals, CommerceError> {
        self.state.totals(rules)
    }

    fn persist(&self) -> Result<(), CommerceError> {
        self.cache.set(&self.key, self.state.lines()).map_err(|e| {
            tracing::warn!(key = %self.key, error = %e, "failed to persist cart");
            CommerceError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use shopfront_cache::MemoryStore;

    fn tee() -> Product {
        Product::new("tee", "Tee", Money::usd(2000)).with_inventory(10)
    }

    #[test]
    fn test_mutations_are_persisted() {
        let cache = Cache::new(MemoryStore::new());
        let keys = StorageKeys::default();

        let mut store = CartStore::load(cache.clone(), &keys, InventoryPolicy::Unchecked);
        store.add_item(tee(), 2, Some("M".into()), None).unwrap();

        let reloaded = CartStore::load(cache, &keys, InventoryPolicy::Unchecked);
        assert_eq!(reloaded.state().item_count(), 2);
        assert_eq!(reloaded.state(), store.state());
    }

    #[test]
    fn test_dispatch_persists() {
        let cache = Cache::in_memory();
        let keys = StorageKeys::default();
        let mut store = CartStore::load(cache.clone(), &keys, InventoryPolicy::Unchecked);

        store.dispatch(CartAction::add(tee(), 1, None, None)).unwrap();
        store.dispatch(CartAction::Clear).unwrap();

        let stored: Vec<CartLine> = cache.get(&keys.cart).unwrap().unwrap();
        assert!(stored.is_empty());
    }

    #[test]
    fn test_malformed_storage_gives_empty_cart() {
        let cache = Cache::in_memory();
        let keys = StorageKeys::default();
        cache.store().set_raw(&keys.cart, "{\"oops\": true").unwrap();

        let mut store = CartStore::load(cache.clone(), &keys, InventoryPolicy::Unchecked);
        assert!(store.state().is_empty());

        store.add_item(tee(), 1, None, None).unwrap();
        let stored: Vec<CartLine> = cache.get(&keys.cart).unwrap().unwrap();
        assert_eq!(stored.len(), 1);
    }
}
