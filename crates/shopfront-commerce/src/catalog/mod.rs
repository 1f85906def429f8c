//! Product catalog module.
//!
//! Contains product types, the bundled sample data and the read-only
//! catalog store.

mod product;
mod sample;
mod store;

pub use product::{slugify, ColorOption, Product};
pub use sample::sample_products;
pub use store::Catalog;
