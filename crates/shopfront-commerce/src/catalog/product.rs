//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A selectable color (e.g., "Navy" shown as `#1f2a44`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ColorOption {
    /// Color name shown to customers and used for filtering.
    pub name: String,
    /// Display color (CSS hex).
    pub hex: String,
}

impl ColorOption {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// A product in the catalog.
///
/// Products are immutable once loaded; cart lines and wishlist entries keep
/// a snapshot of the product as it was when added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Price in the canonical currency.
    pub price: Money,
    /// Compare-at price (original price for showing discounts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Money>,
    /// Image references.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category name.
    pub category: String,
    /// Tags for filtering/search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f32,
    /// Number of reviews.
    #[serde(default)]
    pub review_count: u32,
    /// Units available.
    #[serde(default)]
    pub inventory: u32,
    /// Available sizes, empty when the product has no sizes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    /// Available colors, empty when the product has no colors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<ColorOption>,
    /// Stock keeping unit.
    pub sku: String,
    /// Unix timestamp the product was listed.
    #[serde(default)]
    pub created_at: i64,
}

impl Product {
    /// Create a product with a derived slug and SKU.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        let id = id.into();
        let name = name.into();
        Self {
            slug: slugify(&name),
            sku: id.as_str().to_uppercase(),
            id,
            name,
            description: String::new(),
            price,
            compare_at_price: None,
            images: Vec::new(),
            category: String::new(),
            tags: Vec::new(),
            rating: 0.0,
            review_count: 0,
            inventory: 0,
            sizes: Vec::new(),
            colors: Vec::new(),
            created_at: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_compare_at_price(mut self, price: Money) -> Self {
        self.compare_at_price = Some(price);
        self
    }

    pub fn with_images(mut self, images: &[&str]) -> Self {
        self.images = images.iter().map(|i| i.to_string()).collect();
        self
    }

    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self.review_count = review_count;
        self
    }

    pub fn with_inventory(mut self, inventory: u32) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_sizes(mut self, sizes: &[&str]) -> Self {
        self.sizes = sizes.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_colors(mut self, colors: &[(&str, &str)]) -> Self {
        self.colors = colors
            .iter()
            .map(|(name, hex)| ColorOption::new(*name, *hex))
            .collect();
        self
    }

    pub fn with_created_at(mut self, timestamp: i64) -> Self {
        self.created_at = timestamp;
        self
    }

    /// Check if there is stock left.
    pub fn is_in_stock(&self) -> bool {
        self.inventory > 0
    }

    /// Check if the product is on sale (compare-at price above price).
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<u32> {
        self.compare_at_price.and_then(|cap| {
            if cap.amount_cents > self.price.amount_cents {
                let savings = cap.amount_cents - self.price.amount_cents;
                u32::try_from((savings * 100 + cap.amount_cents / 2) / cap.amount_cents).ok()
            } else {
                None
            }
        })
    }

    /// First image, used for thumbnails.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive size lookup.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s.eq_ignore_ascii_case(size))
    }

    /// Case-insensitive color lookup by name.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c.name.eq_ignore_ascii_case(color))
    }

    /// Case-insensitive tag lookup.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Substring match over name, description, category and tags.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Turn a display name into a URL slug: "Linen Shirt (Blue)" -> "linen-shirt-blue".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product::new("tee", "Classic Cotton Tee", Money::usd(2000))
            .with_category("Clothing")
            .with_tags(&["cotton", "basics"])
            .with_sizes(&["S", "M", "L"])
            .with_colors(&[("Black", "#000000"), ("White", "#ffffff")])
    }

    #[test]
    fn test_product_creation() {
        let product = tee();
        assert_eq!(product.slug, "classic-cotton-tee");
        assert_eq!(product.sku, "TEE");
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_product_on_sale() {
        let product = tee().with_compare_at_price(Money::usd(3000));
        assert!(product.is_on_sale());
        assert_eq!(product.discount_percentage(), Some(33));

        let not_sale = tee().with_compare_at_price(Money::usd(1500));
        assert!(!not_sale.is_on_sale());
        assert_eq!(not_sale.discount_percentage(), None);
    }

    #[test]
    fn test_variant_lookups_ignore_case() {
        let product = tee();
        assert!(product.has_size("m"));
        assert!(product.has_color("black"));
        assert!(product.has_tag("COTTON"));
        assert!(!product.has_size("XL"));
    }

    #[test]
    fn test_matches_text() {
        let product = tee().with_description("Soft everyday t-shirt");
        assert!(product.matches_text("cotton"));
        assert!(product.matches_text("everyday"));
        assert!(product.matches_text("clothing"));
        assert!(product.matches_text("basics"));
        assert!(!product.matches_text("leather"));
        assert!(product.matches_text(""));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Linen Shirt (Blue)"), "linen-shirt-blue");
        assert_eq!(slugify("  Trail Runner 2.0 "), "trail-runner-2-0");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(tee().with_rating(4.5, 12)).unwrap();
        assert!(json.get("reviewCount").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("compareAtPrice").is_none());
    }
}
