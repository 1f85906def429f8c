//! Cart line items.

use crate::catalog::Product;
use crate::ids::{LineId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Identity of a cart line: one product in one size and color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartLineKey {
    pub product_id: ProductId,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl CartLineKey {
    pub fn new(product_id: ProductId, size: Option<String>, color: Option<String>) -> Self {
        Self {
            product_id,
            size: normalize_variant(size),
            color: normalize_variant(color),
        }
    }

    /// The line id this key maps to.
    pub fn line_id(&self) -> LineId {
        LineId::for_variant(&self.product_id, self.size.as_deref(), self.color.as_deref())
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Line id, derived from the (product, size, color) key.
    pub id: LineId,
    /// Product snapshot taken when the line was created.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
}

impl CartLine {
    /// Create a line for `key`.
    pub fn new(key: CartLineKey, product: Product, quantity: u32) -> Self {
        Self {
            id: key.line_id(),
            product,
            quantity,
            selected_size: key.size,
            selected_color: key.color,
        }
    }

    /// The key this line is stored under.
    pub fn key(&self) -> CartLineKey {
        CartLineKey::new(
            self.product.id.clone(),
            self.selected_size.clone(),
            self.selected_color.clone(),
        )
    }

    /// Unit price times quantity, `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.product.price.try_multiply(i64::from(self.quantity))
    }

    /// Variant label, e.g. "M / Black".
    pub fn variant_label(&self) -> Option<String> {
        match (&self.selected_size, &self.selected_color) {
            (Some(size), Some(color)) => Some(format!("{} / {}", size, color)),
            (Some(size), None) => Some(size.clone()),
            (None, Some(color)) => Some(color.clone()),
            (None, None) => None,
        }
    }

    /// Whether the quantity is above the product's tracked inventory.
    pub fn exceeds_inventory(&self) -> bool {
        self.quantity > self.product.inventory
    }
}

fn normalize_variant(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_variants_are_none() {
        let key = CartLineKey::new(ProductId::new("tee"), Some("  ".into()), Some(" Black ".into()));
        assert_eq!(key.size, None);
        assert_eq!(key.color.as_deref(), Some("Black"));
        assert_eq!(key.line_id().as_str(), "tee:_:Black");
    }

    #[test]
    fn test_line_total_and_label() {
        let product = Product::new("tee", "Tee", Money::usd(2000)).with_inventory(1);
        let key = CartLineKey::new(product.id.clone(), Some("M".into()), Some("Black".into()));
        let line = CartLine::new(key.clone(), product, 3);

        assert_eq!(line.line_total(), Some(Money::usd(6000)));
        assert_eq!(line.variant_label().as_deref(), Some("M / Black"));
        assert_eq!(line.key(), key);
        assert!(line.exceeds_inventory());
    }

    #[test]
    fn test_persisted_layout() {
        let product = Product::new("tee", "Tee", Money::usd(2000));
        let key = CartLineKey::new(product.id.clone(), Some("M".into()), None);
        let json = serde_json::to_value(CartLine::new(key, product, 1)).unwrap();

        assert_eq!(json["id"], "tee:M:_");
        assert_eq!(json["selectedSize"], "M");
        assert_eq!(json["quantity"], 1);
        assert!(json.get("selectedColor").is_none());
        assert!(json.get("product").is_some());
    }
}
