//! Checkout module.
//!
//! Contact and address form validation and the order summary.

mod address;
mod form;
mod summary;

pub use address::Address;
pub use form::{CheckoutForm, FieldError, ValidationErrors};
pub use summary::OrderSummary;
