//! Shopping cart module.
//!
//! Contains line items, the pure cart state, derived totals, and the
//! persisted store that ties them to a key-value backend.

mod line;
mod pricing;
mod state;
mod store;

pub use line::{CartLine, CartLineKey};
pub use pricing::{
    CartTotals, PricingRules, FLAT_SHIPPING_CENTS, FREE_SHIPPING_THRESHOLD_CENTS, TAX_RATE_BPS,
};
pub use state::{CartAction, CartState, InventoryPolicy};
pub use store::CartStore;
