//! Product query: filters, price buckets and sort order.

use crate::catalog::Product;
use crate::money::Money;
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Products shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    Newest,
    Rating,
    ReviewCount,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Default,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Newest,
        SortOption::Rating,
        SortOption::ReviewCount,
    ];

    /// Stable key used in URLs and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Newest => "newest",
            SortOption::Rating => "rating",
            SortOption::ReviewCount => "reviews",
        }
    }

    /// Label shown in the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Default => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Newest",
            SortOption::Rating => "Top Rated",
            SortOption::ReviewCount => "Most Reviewed",
        }
    }

    /// Sort products in place. The sort is stable, so ties keep catalog
    /// order.
    pub fn sort(&self, products: &mut [&Product]) {
        match self {
            SortOption::Default => {}
            SortOption::PriceAsc => products.sort_by_key(|p| p.price.amount_cents),
            SortOption::PriceDesc => products.sort_by_key(|p| Reverse(p.price.amount_cents)),
            SortOption::Newest => products.sort_by_key(|p| Reverse(p.created_at)),
            SortOption::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortOption::ReviewCount => products.sort_by_key(|p| Reverse(p.review_count)),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        SortOption::ALL
            .into_iter()
            .find(|o| o.key() == key)
            .ok_or_else(|| {
                let keys: Vec<_> = SortOption::ALL.iter().map(|o| o.key()).collect();
                format!("unknown sort '{}', expected one of: {}", s, keys.join(", "))
            })
    }
}

/// A price bucket, `min` inclusive and `max` exclusive, in USD cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    pub id: &'static str,
    pub label: &'static str,
    pub min_cents: i64,
    pub max_cents: Option<i64>,
}

impl PriceRange {
    pub fn contains(&self, price: &Money) -> bool {
        price.amount_cents >= self.min_cents
            && self.max_cents.map_or(true, |max| price.amount_cents < max)
    }

    /// Look a bucket up by id among [`PRICE_RANGES`](crate::site::PRICE_RANGES).
    pub fn find(id: &str) -> Option<PriceRange> {
        crate::site::PRICE_RANGES
            .iter()
            .copied()
            .find(|r| r.id.eq_ignore_ascii_case(id.trim()))
    }
}

/// Filter and sort parameters for a product listing.
///
/// Selected values within one facet are OR'd; facets are AND'd together.
/// An empty set means the facet is inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub text: String,
    pub categories: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub price_range: Option<PriceRange>,
    pub in_stock_only: bool,
    pub sort: SortOption,
    /// 1-indexed; out-of-range pages are clamped.
    pub page: usize,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.insert(color.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.sizes.insert(size.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    pub fn sorted_by(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Whether any filter is set. Sort and page don't count.
    pub fn has_filters(&self) -> bool {
        !self.text.trim().is_empty()
            || !self.categories.is_empty()
            || !self.colors.is_empty()
            || !self.sizes.is_empty()
            || !self.tags.is_empty()
            || self.price_range.is_some()
            || self.in_stock_only
    }

    /// Check a product against every active facet.
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.text.trim().to_lowercase();
        product.matches_text(&needle)
            && (self.categories.is_empty()
                || self.categories.iter().any(|c| c.eq_ignore_ascii_case(&product.category)))
            && (self.colors.is_empty() || self.colors.iter().any(|c| product.has_color(c)))
            && (self.sizes.is_empty() || self.sizes.iter().any(|s| product.has_size(s)))
            && (self.tags.is_empty() || self.tags.iter().any(|t| product.has_tag(t)))
            && self.price_range.map_or(true, |r| r.contains(&product.price))
            && (!self.in_stock_only || product.is_in_stock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product::new("tee", "Classic Tee", Money::usd(2500))
            .with_description("Soft cotton")
            .with_category("Clothing")
            .with_tags(&["cotton", "basics"])
            .with_sizes(&["S", "M"])
            .with_colors(&[("Black", "#111111")])
            .with_inventory(3)
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = ProductQuery::new();
        assert!(!query.has_filters());
        assert!(query.matches(&tee()));
    }

    #[test]
    fn test_text_is_case_insensitive() {
        assert!(ProductQuery::new().with_text("COTTON").matches(&tee()));
        assert!(ProductQuery::new().with_text("  classic ").matches(&tee()));
        assert!(!ProductQuery::new().with_text("linen").matches(&tee()));
    }

    #[test]
    fn test_or_within_facet_and_across_facets() {
        let either = ProductQuery::new().with_category("Shoes").with_category("clothing");
        assert!(either.matches(&tee()));

        let both = either.with_color("Red");
        assert!(!both.matches(&tee()));
    }

    #[test]
    fn test_size_tag_and_stock_filters() {
        assert!(ProductQuery::new().with_size("m").matches(&tee()));
        assert!(!ProductQuery::new().with_size("XL").matches(&tee()));
        assert!(ProductQuery::new().with_tag("basics").matches(&tee()));

        let sold_out = tee().with_inventory(0);
        assert!(!ProductQuery::new().in_stock_only().matches(&sold_out));
    }

    #[test]
    fn test_price_range_bounds() {
        let range = PriceRange {
            id: "25-50",
            label: "$25 - $50",
            min_cents: 2500,
            max_cents: Some(5000),
        };
        assert!(range.contains(&Money::usd(2500)));
        assert!(range.contains(&Money::usd(4999)));
        assert!(!range.contains(&Money::usd(5000)));
        assert!(ProductQuery::new().with_price_range(range).matches(&tee()));
    }

    #[test]
    fn test_sort_option_parsing() {
        assert_eq!("price-asc".parse::<SortOption>().unwrap(), SortOption::PriceAsc);
        assert_eq!(" Newest ".parse::<SortOption>().unwrap(), SortOption::Newest);
        assert!("cheapest".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_sort_is_stable() {
        let a = Product::new("a", "A", Money::usd(1000));
        let b = Product::new("b", "B", Money::usd(500));
        let c = Product::new("c", "C", Money::usd(1000));
        let mut products = vec![&a, &b, &c];

        SortOption::PriceAsc.sort(&mut products);
        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);

        SortOption::PriceDesc.sort(&mut products);
        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }
}
