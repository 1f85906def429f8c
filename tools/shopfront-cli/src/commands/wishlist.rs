//! Wishlist commands.

use anyhow::Result;
use shopfront_commerce::notify::Severity;

use super::{WishlistArgs, WishlistCommand};
use crate::context::Context;
use crate::output::stock_badge;

/// Run the wishlist command.
pub fn run(args: WishlistArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(WishlistCommand::Show) | None => show_wishlist(ctx),
        Some(WishlistCommand::Add { product }) => add(&product, ctx),
        Some(WishlistCommand::Remove { product }) => remove(&product, ctx),
        Some(WishlistCommand::Toggle { product }) => toggle(&product, ctx),
        Some(WishlistCommand::Move { product }) => move_to_cart(&product, ctx),
        Some(WishlistCommand::Clear) => clear(ctx),
    }
}

fn show_wishlist(ctx: &Context) -> Result<()> {
    let wishlist = ctx.wishlist()?;

    if ctx.output.is_json() {
        ctx.output.json(&wishlist.state().entries());
        return Ok(());
    }

    if wishlist.state().is_empty() {
        ctx.output.info("Your wishlist is empty.");
        return Ok(());
    }

    let currency = *ctx.currency()?.state();
    ctx.output.header(&format!("Wishlist ({})", wishlist.state().count()));
    for entry in wishlist.state().entries() {
        let price = currency.format(&entry.product.price);
        let added = entry.added_at.format("%Y-%m-%d").to_string();
        let stock = stock_badge(&entry.product);
        ctx.output.table_row(
            &[
                entry.id.as_str(),
                entry.product.name.as_str(),
                price.as_str(),
                added.as_str(),
                stock.as_str(),
            ],
            &[20, 26, 12, 10, 16],
        );
    }

    Ok(())
}

fn add(id: &str, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.require(id)?.clone();
    let name = product.name.clone();
    if ctx.wishlist()?.add(product)? {
        ctx.toast(Severity::Success, format!("Saved {} to your wishlist", name));
    } else {
        ctx.output.info(&format!("{} is already in your wishlist", name));
    }
    Ok(())
}

fn remove(id: &str, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.require(id)?;
    if ctx.wishlist()?.remove(&product.id)? {
        ctx.toast(Severity::Info, format!("Removed {} from your wishlist", product.name));
    } else {
        ctx.output.info(&format!("{} isn't in your wishlist", product.name));
    }
    Ok(())
}

fn toggle(id: &str, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.require(id)?.clone();
    let name = product.name.clone();
    if ctx.wishlist()?.toggle(product)? {
        ctx.toast(Severity::Success, format!("Saved {} to your wishlist", name));
    } else {
        ctx.toast(Severity::Info, format!("Removed {} from your wishlist", name));
    }
    Ok(())
}

/// Add the saved product to the cart (no variant) and unsave it.
fn move_to_cart(id: &str, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.require(id)?;
    let mut wishlist = ctx.wishlist()?;
    let Some(entry) = wishlist
        .state()
        .entries()
        .iter()
        .find(|e| e.id == product.id)
        .cloned()
    else {
        ctx.output.info(&format!("{} isn't in your wishlist", product.name));
        return Ok(());
    };

    if ctx.cart()?.add_item(entry.product, 1, None, None)?.is_none() {
        ctx.toast(Severity::Warning, format!("{} is out of stock", product.name));
        return Ok(());
    }
    wishlist.remove(&entry.id)?;
    ctx.toast(Severity::Success, format!("Moved {} to your cart", product.name));
    Ok(())
}

fn clear(ctx: &Context) -> Result<()> {
    ctx.wishlist()?.clear()?;
    ctx.toast(Severity::Info, "Wishlist cleared");
    Ok(())
}
