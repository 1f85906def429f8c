//! Wishlist module.
//!
//! A set of favorited products: no quantities, no variants.

mod state;
mod store;

pub use state::{WishlistAction, WishlistEntry, WishlistState};
pub use store::WishlistStore;
