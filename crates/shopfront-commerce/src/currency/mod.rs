//! Currency display layer.
//!
//! Prices stay in USD cents everywhere; this module only converts and
//! formats them for display in the shopper's selected currency.

mod display;
mod store;

pub use display::CurrencyState;
pub use store::CurrencyStore;
