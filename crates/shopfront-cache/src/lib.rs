//! Type-safe key-value persistence layer for Shopfront.
//!
//! Wraps a string-valued key-value backend (the browser's `localStorage`
//! model) with automatic JSON serialization. Three backends ship with the
//! crate:
//!
//! - [`MemoryStore`]: process-local map, shared between clones.
//! - [`FileStore`]: a single JSON document on disk, used by the CLI.
//! - `LocalStorage`: the browser's `window.localStorage` (wasm32 only).
//!
//! # Example
//!
//! ```
//! use shopfront_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("shopfront:currency", &"EUR").unwrap();
//!
//! let code: Option<String> = cache.get("shopfront:currency").unwrap();
//! assert_eq!(code.as_deref(), Some("EUR"));
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
#[cfg(target_arch = "wasm32")]
pub use backend::LocalStorage;
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
