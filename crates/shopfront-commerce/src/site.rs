//! Static site configuration: metadata, navigation and listing options.

use crate::search::PriceRange;
use serde::Serialize;

/// Storefront metadata.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SiteInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub support_email: &'static str,
}

pub const SITE: SiteInfo = SiteInfo {
    name: "Shopfront",
    tagline: "Everyday goods, made well",
    description: "Clothing, shoes, bags and home goods picked for quality and built to last.",
    url: "https://shopfront.example",
    support_email: "support@shopfront.example",
};

/// A navigation link.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Shop", href: "/products" },
    NavLink { label: "Sale", href: "/products?sale=true" },
    NavLink { label: "Blog", href: "/blog" },
    NavLink { label: "Wishlist", href: "/wishlist" },
];

/// Size filter options, in display order.
pub const SIZE_OPTIONS: [&str; 10] = ["XS", "S", "M", "L", "XL", "7", "8", "9", "10", "11"];

/// Price filter buckets in USD cents.
pub const PRICE_RANGES: [PriceRange; 5] = [
    PriceRange {
        id: "under-25",
        label: "Under $25",
        min_cents: 0,
        max_cents: Some(2_500),
    },
    PriceRange {
        id: "25-50",
        label: "$25 - $50",
        min_cents: 2_500,
        max_cents: Some(5_000),
    },
    PriceRange {
        id: "50-100",
        label: "$50 - $100",
        min_cents: 5_000,
        max_cents: Some(10_000),
    },
    PriceRange {
        id: "100-200",
        label: "$100 - $200",
        min_cents: 10_000,
        max_cents: Some(20_000),
    },
    PriceRange {
        id: "over-200",
        label: "$200 & Above",
        min_cents: 20_000,
        max_cents: None,
    },
];
