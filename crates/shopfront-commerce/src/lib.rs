//! Storefront domain types and state stores for Shopfront.
//!
//! - **Catalog**: products and the bundled sample catalog
//! - **Cart**: line items, derived totals, and a persisted cart store
//! - **Wishlist**: favorited products, persisted like the cart
//! - **Currency**: display-only conversion and formatting
//! - **Search**: filter, sort and paginate product listings
//! - **Notify**: toast queue with deadline-based expiry
//! - **Checkout**: form validation and order summaries
//!
//! State transitions are pure (`apply(action) -> state`); the `*Store`
//! types wrap a state plus a [`shopfront_cache::Cache`] and persist after
//! every change.
//!
//! # Example
//!
//! ```rust
//! use shopfront_cache::Cache;
//! use shopfront_commerce::prelude::*;
//!
//! let catalog = Catalog::sample();
//! let keys = StorageKeys::default();
//! let mut cart = CartStore::load(Cache::in_memory(), &keys, InventoryPolicy::default());
//!
//! let tee = catalog.require("classic-tee")?.clone();
//! cart.add_item(tee, 2, Some("M".into()), Some("Black".into()))?;
//!
//! let totals = cart.totals(&PricingRules::default())?;
//! assert_eq!(totals.subtotal, Money::usd(5000));
//! # Ok::<(), CommerceError>(())
//! ```

pub mod blog;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod currency;
pub mod error;
pub mod ids;
pub mod money;
pub mod notify;
pub mod persist;
pub mod search;
pub mod site;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::persist::StorageKeys;

    // Catalog
    pub use crate::catalog::{Catalog, ColorOption, Product};

    // Cart
    pub use crate::cart::{
        CartAction, CartLine, CartLineKey, CartState, CartStore, CartTotals, InventoryPolicy,
        PricingRules,
    };

    // Wishlist
    pub use crate::wishlist::{WishlistAction, WishlistEntry, WishlistState, WishlistStore};

    // Currency
    pub use crate::currency::{CurrencyState, CurrencyStore};

    // Search
    pub use crate::search::{
        search, search_with_facets, Facet, Pagination, PriceRange, ProductQuery, SearchResults,
        SortOption,
    };

    // Notifications
    pub use crate::notify::{Severity, Toast, ToastId, ToastQueue};

    // Checkout
    pub use crate::checkout::{Address, CheckoutForm, OrderSummary, ValidationErrors};

    // Content
    pub use crate::blog::{Blog, BlogPost};
}
