//! Toast notifications.

mod toast;

pub use toast::{Severity, Toast, ToastId, ToastQueue, DEFAULT_DURATION};
