//! Product browsing commands.

use anyhow::{anyhow, Result};
use shopfront_commerce::catalog::Product;
use shopfront_commerce::currency::CurrencyState;
use shopfront_commerce::search::{compute_facets, search, PriceRange, ProductQuery};
use shopfront_commerce::site::PRICE_RANGES;

use super::{CatalogArgs, CatalogCommand, ListArgs};
use crate::context::Context;
use crate::output::{sale_badge, stock_badge};

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CatalogCommand::List(list)) => list_products(list, ctx),
        None => list_products(ListArgs::default(), ctx),
        Some(CatalogCommand::Show { product }) => show_product(&product, ctx),
        Some(CatalogCommand::Facets) => show_facets(ctx),
    }
}

fn build_query(args: ListArgs) -> Result<ProductQuery> {
    let price_range = match args.price.as_deref() {
        Some(id) => Some(PriceRange::find(id).ok_or_else(|| {
            let ids: Vec<_> = PRICE_RANGES.iter().map(|r| r.id).collect();
            anyhow!("Unknown price range '{}', expected one of: {}", id, ids.join(", "))
        })?),
        None => None,
    };

    Ok(ProductQuery {
        text: args.query.unwrap_or_default(),
        categories: args.categories.into_iter().collect(),
        colors: args.colors.into_iter().collect(),
        sizes: args.sizes.into_iter().collect(),
        tags: args.tags.into_iter().collect(),
        price_range,
        in_stock_only: args.in_stock,
        sort: args.sort,
        page: args.page,
    })
}

/// Price with the compare-at price when on sale.
pub fn price_label(product: &Product, currency: &CurrencyState) -> String {
    match product.compare_at_price.filter(|_| product.is_on_sale()) {
        Some(was) => format!("{} (was {})", currency.format(&product.price), currency.format(&was)),
        None => currency.format(&product.price),
    }
}

fn list_products(args: ListArgs, ctx: &Context) -> Result<()> {
    let query = build_query(args)?;
    let results = search(ctx.catalog.products(), &query, ctx.config.catalog.page_size);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    if results.is_empty() {
        ctx.output.info("No products match those filters.");
        return Ok(());
    }

    let currency = *ctx.currency()?.state();
    let p = &results.pagination;
    ctx.output.header(&format!(
        "Products {}-{} of {} ({})",
        p.start_item(),
        p.end_item(),
        p.total,
        query.sort.label()
    ));
    for product in &results.items {
        let price = price_label(product, &currency);
        let rating = format!("★ {:.1} ({})", product.rating, product.review_count);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                product.name.as_str(),
                price.as_str(),
                product.category.as_str(),
                rating.as_str(),
            ],
            &[20, 26, 24, 12, 14],
        );
    }
    ctx.output.line("");
    ctx.output.info(&format!("Page {} of {}", p.page, p.total_pages));

    Ok(())
}

fn show_product(id: &str, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.require(id)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    let currency = *ctx.currency()?.state();
    let in_wishlist = ctx.wishlist()?.state().contains(&product.id);
    let in_cart = ctx.cart()?.state().quantity_of(&product.id);

    ctx.output.header(&product.name);
    ctx.output.line(&product.description);
    ctx.output.line("");
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("sku", &product.sku);
    ctx.output.kv("price", &price_label(product, &currency));
    if let Some(badge) = sale_badge(product) {
        ctx.output.kv("sale", &badge);
    }
    ctx.output.kv("category", &product.category);
    ctx.output.kv("stock", &stock_badge(product));
    ctx.output.kv(
        "rating",
        &format!("{:.1} from {} reviews", product.rating, product.review_count),
    );
    if !product.sizes.is_empty() {
        ctx.output.kv("sizes", &product.sizes.join(", "));
    }
    if !product.colors.is_empty() {
        let colors: Vec<_> = product.colors.iter().map(|c| c.name.as_str()).collect();
        ctx.output.kv("colors", &colors.join(", "));
    }
    if !product.tags.is_empty() {
        ctx.output.kv("tags", &product.tags.join(", "));
    }
    if in_wishlist {
        ctx.output.kv("wishlist", "♥ saved");
    }
    if in_cart > 0 {
        ctx.output.kv("in cart", &in_cart.to_string());
    }

    let related = ctx.catalog.related(product, 4);
    if !related.is_empty() {
        ctx.output.header("You may also like");
        for other in related {
            ctx.output.list_item(&format!("{} - {}", other.name, currency.format(&other.price)));
        }
    }

    Ok(())
}

fn show_facets(ctx: &Context) -> Result<()> {
    let facets = compute_facets(ctx.catalog.products(), &ProductQuery::new());

    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    for facet in &facets {
        ctx.output.header(&facet.name);
        for value in &facet.values {
            ctx.output.list_item(&format!("{} ({})", value.value, value.count));
        }
    }

    Ok(())
}
