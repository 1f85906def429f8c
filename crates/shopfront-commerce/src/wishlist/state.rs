//! Wishlist state and its transitions.

use crate::catalog::Product;
use crate::ids::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A favorited product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Same as the product id.
    pub id: ProductId,
    /// Product snapshot taken when the entry was added.
    pub product: Product,
    pub added_at: DateTime<Utc>,
}

/// A wishlist transition.
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    Add(Product),
    Remove(ProductId),
    Toggle(Product),
    Clear,
}

/// Wishlist entries in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistState {
    entries: Vec<WishlistEntry>,
}

impl WishlistState {
    /// Rebuild from stored entries, keeping the first entry per product.
    pub fn from_entries(entries: Vec<WishlistEntry>) -> Self {
        let mut state = Self::default();
        for entry in entries {
            if !state.contains(&entry.product.id) {
                state.entries.push(WishlistEntry {
                    id: entry.product.id.clone(),
                    ..entry
                });
            }
        }
        state
    }

    /// Apply an action, returning the next state.
    pub fn apply(mut self, action: WishlistAction) -> Self {
        match action {
            WishlistAction::Add(product) => {
                self.add(product);
            }
            WishlistAction::Remove(product_id) => {
                self.remove(&product_id);
            }
            WishlistAction::Toggle(product) => {
                self.toggle(product);
            }
            WishlistAction::Clear => self.clear(),
        }
        self
    }

    /// Add a product. Returns false if it was already there.
    pub fn add(&mut self, product: Product) -> bool {
        self.add_at(product, Utc::now())
    }

    /// Add a product with an explicit timestamp.
    pub fn add_at(&mut self, product: Product, added_at: DateTime<Utc>) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.entries.push(WishlistEntry {
            id: product.id.clone(),
            product,
            added_at,
        });
        true
    }

    /// Remove a product. Returns false if it wasn't there.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.id != product_id);
        self.entries.len() < len_before
    }

    /// Add if absent, remove if present. Returns whether it is now listed.
    pub fn toggle(&mut self, product: Product) -> bool {
        if self.remove(&product.id) {
            false
        } else {
            self.add(product)
        }
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|e| &e.id == product_id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Listed products, oldest first.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.entries.iter().map(|e| &e.product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str) -> Product {
        Product::new(id, id, Money::usd(1000))
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = WishlistState::default();
        assert!(wishlist.add(product("tee")));
        assert!(!wishlist.add(product("tee")));
        assert_eq!(wishlist.count(), 1);
    }

    #[test]
    fn test_remove_and_contains() {
        let mut wishlist = WishlistState::default();
        wishlist.add(product("tee"));
        wishlist.add(product("mug"));

        assert!(wishlist.remove(&ProductId::new("tee")));
        assert!(!wishlist.remove(&ProductId::new("tee")));
        assert!(!wishlist.contains(&ProductId::new("tee")));
        assert!(wishlist.contains(&ProductId::new("mug")));
    }

    #[test]
    fn test_toggle() {
        let mut wishlist = WishlistState::default();
        assert!(wishlist.toggle(product("tee")));
        assert!(!wishlist.toggle(product("tee")));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_reducer() {
        let state = WishlistState::default()
            .apply(WishlistAction::Add(product("tee")))
            .apply(WishlistAction::Add(product("tee")))
            .apply(WishlistAction::Toggle(product("mug")))
            .apply(WishlistAction::Remove(ProductId::new("tee")));
        assert_eq!(state.count(), 1);
        assert_eq!(state.products().next().map(|p| p.id.as_str()), Some("mug"));

        assert!(state.apply(WishlistAction::Clear).is_empty());
    }

    #[test]
    fn test_from_entries_dedupes() {
        let now = Utc::now();
        let entry = WishlistEntry {
            id: ProductId::new("tee"),
            product: product("tee"),
            added_at: now,
        };
        let state = WishlistState::from_entries(vec![entry.clone(), entry]);
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn test_persisted_layout() {
        let mut wishlist = WishlistState::default();
        wishlist.add(product("tee"));
        let json = serde_json::to_value(wishlist.entries()).unwrap();
        assert_eq!(json[0]["id"], "tee");
        assert!(json[0]["addedAt"].is_string());
        assert!(json[0]["product"].is_object());
    }
}
