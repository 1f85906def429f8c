//! Read-only catalog store.

use crate::catalog::{sample_products, ColorOption, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// The product catalog: a fixed list, read-only after construction.
///
/// Catalog order is preserved everywhere; it is the "default" sort.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The bundled sample catalog.
    pub fn sample() -> Self {
        Self::new(sample_products())
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn require(&self, id: &str) -> Result<&Product, CommerceError> {
        self.get(&ProductId::new(id))
            .or_else(|| self.by_slug(id))
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Look up a product by slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.category.as_str()))
    }

    /// Distinct tags in first-seen order.
    pub fn tags(&self) -> Vec<&str> {
        distinct(self.products.iter().flat_map(|p| p.tags.iter().map(String::as_str)))
    }

    /// Distinct sizes in first-seen order.
    pub fn sizes(&self) -> Vec<&str> {
        distinct(self.products.iter().flat_map(|p| p.sizes.iter().map(String::as_str)))
    }

    /// Distinct colors by name, keeping the first display color seen.
    pub fn colors(&self) -> Vec<&ColorOption> {
        let mut seen: Vec<&ColorOption> = Vec::new();
        for color in self.products.iter().flat_map(|p| p.colors.iter()) {
            if !seen.iter().any(|c| c.name == color.name) {
                seen.push(color);
            }
        }
        seen
    }

    /// Other products in the same category, in catalog order.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Products with a compare-at price above their price.
    pub fn on_sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_on_sale()).collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id_and_slug() {
        let catalog = Catalog::sample();
        let tee = catalog.get(&ProductId::new("classic-tee")).unwrap();
        assert_eq!(catalog.by_slug("classic-cotton-tee").unwrap().id, tee.id);
        assert!(catalog.require("classic-cotton-tee").is_ok());
        assert!(matches!(
            catalog.require("missing"),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_distinct_facet_values() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.categories(),
            vec!["Clothing", "Shoes", "Accessories", "Bags", "Electronics", "Home"]
        );
        let colors = catalog.colors();
        assert_eq!(colors.iter().filter(|c| c.name == "Black").count(), 1);
        assert!(catalog.sizes().contains(&"XL"));
        assert!(catalog.tags().contains(&"gift"));
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = Catalog::sample();
        let boots = catalog.require("leather-boots").unwrap();
        let related = catalog.related(boots, 4);
        assert_eq!(related.len(), 2);
        assert!(related.iter().all(|p| p.category == "Shoes" && p.id != boots.id));
    }

    #[test]
    fn test_on_sale() {
        let catalog = Catalog::sample();
        assert!(catalog.on_sale().iter().all(|p| p.is_on_sale()));
        assert_eq!(catalog.on_sale().len(), 6);
    }
}
