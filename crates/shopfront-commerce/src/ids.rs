//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where a LineId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(LineId);
define_id!(OrderId);

/// Placeholder for an unselected size or color inside a line id.
const NO_VARIANT: &str = "_";

impl LineId {
    /// Derive the line id for a (product, size, color) key.
    ///
    /// The same key always yields the same id, so a line id survives a
    /// save/load cycle. Each part is escaped, so distinct keys never share
    /// an id.
    pub fn for_variant(product_id: &ProductId, size: Option<&str>, color: Option<&str>) -> Self {
        let variant =
            |part: Option<&str>| part.map_or_else(|| NO_VARIANT.to_string(), escape_part);
        Self(format!(
            "{}:{}:{}",
            escape_part(product_id.as_str()),
            variant(size),
            variant(color)
        ))
    }
}

/// Percent-escape the separator, the placeholder and the escape character.
fn escape_part(part: &str) -> String {
    let mut escaped = String::with_capacity(part.len());
    for c in part.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            ':' => escaped.push_str("%3A"),
            '_' => escaped.push_str("%5F"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl OrderId {
    /// Generate a human-readable order number, e.g. `SF-1A2B3C4D5E`.
    pub fn generate() -> Self {
        Self(format!("SF-{}", generate_id().to_uppercase()))
    }
}

/// Generate a unique ID from the current time and a process counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let millis = chrono::Utc::now().timestamp_millis().unsigned_abs();
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:x}{:03x}", millis, counter & 0xfff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("prod-789");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"prod-789\"");
    }

    #[test]
    fn test_line_id_is_deterministic() {
        let product = ProductId::new("tee");
        let a = LineId::for_variant(&product, Some("M"), Some("Black"));
        let b = LineId::for_variant(&product, Some("M"), Some("Black"));
        let c = LineId::for_variant(&product, Some("L"), Some("Black"));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "tee:M:Black");
        assert_eq!(LineId::for_variant(&product, None, None).as_str(), "tee:_:_");
    }

    #[test]
    fn test_line_id_distinguishes_placeholder_and_separator() {
        let tee = ProductId::new("tee");
        assert_ne!(
            LineId::for_variant(&tee, Some("_"), None),
            LineId::for_variant(&tee, None, None)
        );
        assert_eq!(LineId::for_variant(&tee, Some("_"), None).as_str(), "tee:%5F:_");

        let a = LineId::for_variant(&ProductId::new("a:b"), Some("c"), None);
        let b = LineId::for_variant(&ProductId::new("a"), Some("b:c"), None);
        assert_ne!(a, b);

        let x = LineId::for_variant(&tee, Some("%3A"), None);
        let y = LineId::for_variant(&tee, Some(":"), None);
        assert_ne!(x, y);
        let gift = ProductId::new("gift_card");
        assert_eq!(LineId::for_variant(&gift, None, None).as_str(), "gift%5Fcard:_:_");
    }

    #[test]
    fn test_order_ids_are_unique() {
        let a = OrderId::generate();
        let b = OrderId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("SF-"));
    }
}
