//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Routine misuse (removing a missing line, selecting an unknown currency)
/// is absorbed by the stores and never shows up here.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Blog post not found.
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// Checkout was attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout form failed validation.
    #[error("Checkout form is invalid: {0}")]
    InvalidForm(crate::checkout::ValidationErrors),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Storage backend error.
    #[error("Storage error: {0}")]
    StorageError(#[from] shopfront_cache::CacheError),
}
