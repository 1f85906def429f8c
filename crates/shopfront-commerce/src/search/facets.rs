//! Sidebar facet counts.

use crate::catalog::Product;
use crate::search::ProductQuery;
use crate::site::PRICE_RANGES;
use serde::Serialize;

/// Type of facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetType {
    /// Discrete values (categories, colors, sizes, tags).
    Terms,
    /// Price buckets.
    Range,
}

/// A single facet value with its product count.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FacetValue {
    pub value: String,
    pub count: usize,
    /// Whether the current query selects this value.
    pub selected: bool,
}

/// One filterable dimension.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Facet {
    /// Display name (e.g., "Category").
    pub name: String,
    /// Field this facet filters on.
    pub field: String,
    pub facet_type: FacetType,
    pub values: Vec<FacetValue>,
}

impl Facet {
    pub fn terms(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            facet_type: FacetType::Terms,
            values: Vec::new(),
        }
    }

    pub fn range(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            facet_type: FacetType::Range,
            ..Self::terms(name, field)
        }
    }

    pub fn add_value(&mut self, value: impl Into<String>, count: usize, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
        });
    }

    /// Count for a value, matched case-insensitively.
    pub fn count_of(&self, value: &str) -> Option<usize> {
        self.values
            .iter()
            .find(|v| v.value.eq_ignore_ascii_case(value))
            .map(|v| v.count)
    }

    /// Count one term per product, in first-seen order.
    fn count_terms<'a>(&mut self, products: &'a [Product], terms: impl Fn(&'a Product) -> Vec<&'a str>) {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for product in products {
            let mut seen: Vec<&str> = Vec::new();
            for term in terms(product) {
                if seen.iter().any(|s| s.eq_ignore_ascii_case(term)) {
                    continue;
                }
                seen.push(term);
                match counts.iter_mut().find(|(t, _)| t.eq_ignore_ascii_case(term)) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((term, 1)),
                }
            }
        }
        for (term, count) in counts {
            self.values.push(FacetValue {
                value: term.to_string(),
                count,
                selected: false,
            });
        }
    }

    fn mark_selected<'s>(&mut self, selected: impl IntoIterator<Item = &'s String>) {
        for wanted in selected {
            for value in &mut self.values {
                if value.value.eq_ignore_ascii_case(wanted) {
                    value.selected = true;
                }
            }
        }
    }
}

/// Facet counts over the whole catalog, with the query's selections
/// flagged. Counts don't narrow as filters are applied.
pub fn compute_facets(products: &[Product], query: &ProductQuery) -> Vec<Facet> {
    let mut category = Facet::terms("Category", "category");
    category.count_terms(products, |p| vec![p.category.as_str()]);
    category.mark_selected(&query.categories);

    let mut color = Facet::terms("Color", "colors");
    color.count_terms(products, |p| p.colors.iter().map(|c| c.name.as_str()).collect());
    color.mark_selected(&query.colors);

    let mut size = Facet::terms("Size", "sizes");
    size.count_terms(products, |p| p.sizes.iter().map(String::as_str).collect());
    size.mark_selected(&query.sizes);

    let mut tag = Facet::terms("Tag", "tags");
    tag.count_terms(products, |p| p.tags.iter().map(String::as_str).collect());
    tag.mark_selected(&query.tags);

    let mut price = Facet::range("Price", "price");
    for range in PRICE_RANGES {
        let count = products.iter().filter(|p| range.contains(&p.price)).count();
        let selected = query.price_range.is_some_and(|r| r.id == range.id);
        price.add_value(range.label, count, selected);
    }

    vec![category, color, size, tag, price]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_products;

    #[test]
    fn test_category_counts_over_sample() {
        let products = sample_products();
        let facets = compute_facets(&products, &ProductQuery::new());
        let category = &facets[0];

        assert_eq!(category.count_of("Clothing"), Some(4));
        assert_eq!(category.count_of("Electronics"), Some(2));
        let total: usize = category.values.iter().map(|v| v.count).sum();
        assert_eq!(total, products.len());
    }

    #[test]
    fn test_price_buckets_cover_every_product() {
        let products = sample_products();
        let facets = compute_facets(&products, &ProductQuery::new());
        let price = facets.iter().find(|f| f.facet_type == FacetType::Range).unwrap();

        assert_eq!(price.values.len(), PRICE_RANGES.len());
        let total: usize = price.values.iter().map(|v| v.count).sum();
        assert_eq!(total, products.len());
    }

    #[test]
    fn test_selected_values_are_flagged() {
        let products = sample_products();
        let query = ProductQuery::new().with_category("shoes").with_color("Black");
        let facets = compute_facets(&products, &query);

        let shoes = facets[0].values.iter().find(|v| v.value == "Shoes").unwrap();
        assert!(shoes.selected);
        let black = facets[1].values.iter().find(|v| v.value == "Black").unwrap();
        assert!(black.selected);
        assert!(facets[0].values.iter().filter(|v| v.selected).count() == 1);
    }

    #[test]
    fn test_empty_catalog_has_empty_terms() {
        let facets = compute_facets(&[], &ProductQuery::new());
        assert!(facets[0].values.is_empty());
        assert!(facets[4].values.iter().all(|v| v.count == 0));
    }
}
