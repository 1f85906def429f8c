//! Bundled sample catalog.

use crate::catalog::Product;
use crate::money::Money;

const APPAREL_SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];
const SHOE_SIZES: [&str; 5] = ["7", "8", "9", "10", "11"];

/// The storefront's static product list, in catalog order.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("classic-tee", "Classic Cotton Tee", Money::usd(2500))
            .with_description("A heavyweight cotton tee with a relaxed fit that holds its shape wash after wash.")
            .with_compare_at_price(Money::usd(3500))
            .with_category("Clothing")
            .with_tags(&["cotton", "basics", "bestseller"])
            .with_images(&["/images/products/classic-tee-1.jpg", "/images/products/classic-tee-2.jpg"])
            .with_rating(4.5, 128)
            .with_inventory(50)
            .with_sizes(&APPAREL_SIZES)
            .with_colors(&[("Black", "#111111"), ("White", "#f5f5f5"), ("Navy", "#1f2a44")])
            .with_created_at(1_704_844_800),
        Product::new("linen-shirt", "Linen Button-Down Shirt", Money::usd(5900))
            .with_description("Breathable European linen, garment washed for a soft, lived-in feel.")
            .with_category("Clothing")
            .with_tags(&["linen", "summer"])
            .with_images(&["/images/products/linen-shirt-1.jpg"])
            .with_rating(4.3, 64)
            .with_inventory(30)
            .with_sizes(&["S", "M", "L", "XL"])
            .with_colors(&[("White", "#f5f5f5"), ("Sky Blue", "#9cc3e6")])
            .with_created_at(1_709_337_600),
        Product::new("denim-jacket", "Vintage Denim Jacket", Money::usd(8900))
            .with_description("Rigid indigo denim cut in a classic trucker silhouette.")
            .with_compare_at_price(Money::usd(12000))
            .with_category("Clothing")
            .with_tags(&["denim", "outerwear", "bestseller"])
            .with_images(&["/images/products/denim-jacket-1.jpg", "/images/products/denim-jacket-2.jpg"])
            .with_rating(4.7, 210)
            .with_inventory(12)
            .with_sizes(&["S", "M", "L"])
            .with_colors(&[("Indigo", "#2e3a6e")])
            .with_created_at(1_700_438_400),
        Product::new("wool-sweater", "Merino Wool Sweater", Money::usd(11000))
            .with_description("Fine-gauge merino crewneck that layers under a coat without bulk.")
            .with_category("Clothing")
            .with_tags(&["wool", "winter"])
            .with_images(&["/images/products/wool-sweater-1.jpg"])
            .with_rating(4.6, 88)
            .with_inventory(0)
            .with_sizes(&["S", "M", "L", "XL"])
            .with_colors(&[("Charcoal", "#36454f"), ("Cream", "#f3ead8")])
            .with_created_at(1_696_464_000),
        Product::new("trail-runner", "Trail Runner Sneakers", Money::usd(12000))
            .with_description("Grippy lugged outsole and a cushioned midsole for mixed terrain.")
            .with_category("Shoes")
            .with_tags(&["running", "outdoor"])
            .with_images(&["/images/products/trail-runner-1.jpg"])
            .with_rating(4.4, 156)
            .with_inventory(25)
            .with_sizes(&SHOE_SIZES)
            .with_colors(&[("Black", "#111111"), ("Olive", "#6b7045")])
            .with_created_at(1_707_868_800),
        Product::new("leather-boots", "Leather Chelsea Boots", Money::usd(18500))
            .with_description("Full-grain leather uppers with elastic gores and a stacked heel.")
            .with_compare_at_price(Money::usd(22000))
            .with_category("Shoes")
            .with_tags(&["leather", "winter"])
            .with_images(&["/images/products/leather-boots-1.jpg"])
            .with_rating(4.8, 97)
            .with_inventory(8)
            .with_sizes(&SHOE_SIZES)
            .with_colors(&[("Brown", "#6f4e37"), ("Black", "#111111")])
            .with_created_at(1_696_032_000),
        Product::new("canvas-slip-on", "Canvas Slip-On", Money::usd(4500))
            .with_description("Lightweight canvas slip-ons for warm days.")
            .with_category("Shoes")
            .with_tags(&["canvas", "summer"])
            .with_images(&["/images/products/canvas-slip-on-1.jpg"])
            .with_rating(4.1, 45)
            .with_inventory(40)
            .with_sizes(&["6", "7", "8", "9", "10"])
            .with_colors(&[("White", "#f5f5f5"), ("Navy", "#1f2a44")])
            .with_created_at(1_711_929_600),
        Product::new("leather-wallet", "Slim Leather Wallet", Money::usd(3500))
            .with_description("Six card slots and a cash sleeve in vegetable-tanned leather.")
            .with_category("Accessories")
            .with_tags(&["leather", "gift"])
            .with_images(&["/images/products/leather-wallet-1.jpg"])
            .with_rating(4.6, 302)
            .with_inventory(100)
            .with_colors(&[("Brown", "#6f4e37"), ("Black", "#111111")])
            .with_created_at(1_691_798_400),
        Product::new("aviator-sunglasses", "Aviator Sunglasses", Money::usd(7500))
            .with_description("Polarized lenses in a lightweight metal frame.")
            .with_compare_at_price(Money::usd(9500))
            .with_category("Accessories")
            .with_tags(&["summer", "eyewear"])
            .with_images(&["/images/products/aviator-sunglasses-1.jpg"])
            .with_rating(4.2, 71)
            .with_inventory(20)
            .with_colors(&[("Gold", "#c9a94b"), ("Silver", "#c0c0c0")])
            .with_created_at(1_715_990_400),
        Product::new("wool-beanie", "Ribbed Wool Beanie", Money::usd(2200))
            .with_description("Chunky rib knit with a fold-over cuff.")
            .with_category("Accessories")
            .with_tags(&["wool", "winter", "gift"])
            .with_images(&["/images/products/wool-beanie-1.jpg"])
            .with_rating(4.5, 54)
            .with_inventory(60)
            .with_colors(&[("Charcoal", "#36454f"), ("Mustard", "#d4a017")])
            .with_created_at(1_701_388_800),
        Product::new("weekender-bag", "Canvas Weekender Bag", Money::usd(15000))
            .with_description("Waxed canvas holdall with leather handles and a shoe pocket.")
            .with_category("Bags")
            .with_tags(&["canvas", "travel"])
            .with_images(&["/images/products/weekender-bag-1.jpg"])
            .with_rating(4.7, 39)
            .with_inventory(15)
            .with_colors(&[("Olive", "#6b7045"), ("Navy", "#1f2a44")])
            .with_created_at(1_706_400_000),
        Product::new("leather-tote", "Leather Tote Bag", Money::usd(21000))
            .with_description("Structured tote that fits a 15-inch laptop.")
            .with_category("Bags")
            .with_tags(&["leather", "work"])
            .with_images(&["/images/products/leather-tote-1.jpg"])
            .with_rating(4.9, 26)
            .with_inventory(5)
            .with_colors(&[("Tan", "#d2b48c"), ("Black", "#111111")])
            .with_created_at(1_717_372_800),
        Product::new("mini-backpack", "Nylon Mini Backpack", Money::usd(6500))
            .with_description("Water-resistant nylon daypack with a padded back panel.")
            .with_compare_at_price(Money::usd(8000))
            .with_category("Bags")
            .with_tags(&["travel", "nylon"])
            .with_images(&["/images/products/mini-backpack-1.jpg"])
            .with_rating(4.0, 18)
            .with_inventory(0)
            .with_colors(&[("Black", "#111111"), ("Lilac", "#c8a2c8")])
            .with_created_at(1_713_744_000),
        Product::new("wireless-earbuds", "Wireless Earbuds", Money::usd(9900))
            .with_description("Active noise cancelling earbuds with a 24-hour charging case.")
            .with_category("Electronics")
            .with_tags(&["audio", "gift", "bestseller"])
            .with_images(&["/images/products/wireless-earbuds-1.jpg"])
            .with_rating(4.3, 540)
            .with_inventory(75)
            .with_colors(&[("White", "#f5f5f5"), ("Black", "#111111")])
            .with_created_at(1_706_745_600),
        Product::new("smart-watch", "Fitness Smart Watch", Money::usd(24900))
            .with_description("Heart-rate, sleep and GPS tracking with a week of battery life.")
            .with_compare_at_price(Money::usd(29900))
            .with_category("Electronics")
            .with_tags(&["fitness", "wearable"])
            .with_images(&["/images/products/smart-watch-1.jpg", "/images/products/smart-watch-2.jpg"])
            .with_rating(4.4, 187)
            .with_inventory(18)
            .with_sizes(&["S", "L"])
            .with_colors(&[("Black", "#111111"), ("Rose Gold", "#b76e79")])
            .with_created_at(1_710_460_800),
        Product::new("desk-lamp", "LED Desk Lamp", Money::usd(4800))
            .with_description("Dimmable lamp with adjustable color temperature and a USB port.")
            .with_category("Home")
            .with_tags(&["lighting", "work"])
            .with_images(&["/images/products/desk-lamp-1.jpg"])
            .with_rating(4.2, 66)
            .with_inventory(33)
            .with_colors(&[("White", "#f5f5f5"), ("Black", "#111111")])
            .with_created_at(1_699_142_400),
        Product::new("scented-candle", "Cedar Scented Candle", Money::usd(1800))
            .with_description("Hand-poured soy candle with cedar and vetiver notes.")
            .with_category("Home")
            .with_tags(&["gift", "fragrance"])
            .with_images(&["/images/products/scented-candle-1.jpg"])
            .with_rating(4.8, 143)
            .with_inventory(80)
            .with_created_at(1_714_867_200),
        Product::new("throw-blanket", "Knit Throw Blanket", Money::usd(6800))
            .with_description("Oversized cotton-wool blend throw for the sofa.")
            .with_category("Home")
            .with_tags(&["knit", "winter", "gift"])
            .with_images(&["/images/products/throw-blanket-1.jpg"])
            .with_rating(4.6, 77)
            .with_inventory(22)
            .with_colors(&[("Cream", "#f3ead8"), ("Sage", "#9caf88")])
            .with_created_at(1_702_598_400),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_and_slugs_are_unique() {
        let products = sample_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        let slugs: HashSet<_> = products.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(ids.len(), products.len());
        assert_eq!(slugs.len(), products.len());
    }

    #[test]
    fn test_sample_prices_are_canonical() {
        assert!(sample_products()
            .iter()
            .all(|p| p.price.currency == crate::money::Currency::USD && p.price.is_positive()));
    }
}
