//! Search module.
//!
//! Filtering, sorting and pagination over the product list, plus facet
//! counts for the sidebar.

mod engine;
mod facets;
mod query;
mod results;

pub use engine::{search, search_with_facets};
pub use facets::{compute_facets, Facet, FacetType, FacetValue};
pub use query::{PriceRange, ProductQuery, SortOption, DEFAULT_PAGE_SIZE};
pub use results::{Pagination, SearchResults};
