//! The listing pipeline: filter, sort, paginate.

use crate::catalog::Product;
use crate::search::{compute_facets, Pagination, ProductQuery, SearchResults};

/// Run a query over a product list.
///
/// Pure: the same products and query always give the same page.
pub fn search<'a>(products: &'a [Product], query: &ProductQuery, per_page: usize) -> SearchResults<&'a Product> {
    let mut matched: Vec<&Product> = products.iter().filter(|p| query.matches(p)).collect();
    query.sort.sort(&mut matched);

    let pagination = Pagination::new(query.page, per_page, matched.len());
    if pagination.page != query.page.max(1) {
        tracing::debug!(
            requested = query.page,
            page = pagination.page,
            "requested page out of range, clamped"
        );
    }

    let items = matched
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.per_page)
        .collect();
    SearchResults::new(items, pagination)
}

/// [`search`] plus catalog-wide facet counts.
pub fn search_with_facets<'a>(
    products: &'a [Product],
    query: &ProductQuery,
    per_page: usize,
) -> SearchResults<&'a Product> {
    search(products, query, per_page).with_facets(compute_facets(products, query))
}
