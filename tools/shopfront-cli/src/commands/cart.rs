//! Cart commands.

use anyhow::Result;
use dialoguer::Confirm;
use serde::Serialize;
use shopfront_cache::FileStore;
use shopfront_commerce::cart::{CartLine, CartStore, CartTotals};
use shopfront_commerce::notify::Severity;
use shopfront_commerce::LineId;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CartCommand::Show) | None => show_cart(ctx),
        Some(CartCommand::Add {
            product,
            quantity,
            size,
            color,
        }) => add_item(&product, quantity, size, color, ctx),
        Some(CartCommand::Remove { line }) => remove_item(&line, ctx),
        Some(CartCommand::Set { line, quantity }) => set_quantity(&line, quantity, ctx),
        Some(CartCommand::Clear { yes }) => clear_cart(yes, ctx),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartView<'a> {
    lines: &'a [CartLine],
    totals: CartTotals,
}

fn show_cart(ctx: &Context) -> Result<()> {
    let cart = ctx.cart()?;
    print_cart(&cart, ctx)
}

/// Print the cart lines and totals in the selected currency.
pub fn print_cart(cart: &CartStore<FileStore>, ctx: &Context) -> Result<()> {
    let rules = ctx.pricing();
    let totals = cart.totals(&rules)?;

    if ctx.output.is_json() {
        ctx.output.json(&CartView {
            lines: cart.state().lines(),
            totals,
        });
        return Ok(());
    }

    if cart.state().is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    let currency = *ctx.currency()?.state();
    ctx.output.header(&format!("Cart ({} items)", totals.item_count));
    for line in cart.state().lines() {
        let variant = line.variant_label().unwrap_or_default();
        let quantity = format!("x{}", line.quantity);
        let total = line
            .line_total()
            .map(|t| currency.format(&t))
            .unwrap_or_else(|| "-".to_string());
        ctx.output.table_row(
            &[
                line.id.as_str(),
                line.product.name.as_str(),
                variant.as_str(),
                quantity.as_str(),
                total.as_str(),
            ],
            &[28, 26, 14, 5, 12],
        );
    }

    ctx.output.line("");
    ctx.output.kv("subtotal", &currency.format(&totals.subtotal));
    ctx.output.kv("tax", &currency.format(&totals.tax));
    let shipping = if totals.has_free_shipping() {
        "Free".to_string()
    } else {
        currency.format(&totals.shipping)
    };
    ctx.output.kv("shipping", &shipping);
    ctx.output.kv("total", &currency.format(&totals.total));

    let remaining = totals.amount_to_free_shipping(&rules);
    if remaining.is_positive() {
        ctx.output.info(&format!(
            "Add {} more for free shipping.",
            currency.format(&remaining)
        ));
    }
    for line in cart.state().lines_over_inventory() {
        ctx.output.warn(&format!(
            "Only {} of {} in stock.",
            line.product.inventory, line.product.name
        ));
    }

    Ok(())
}

fn add_item(
    id: &str,
    quantity: u32,
    size: Option<String>,
    color: Option<String>,
    ctx: &Context,
) -> Result<()> {
    let product = ctx.catalog.require(id)?.clone();
    if let Some(size) = size.as_deref().filter(|s| !product.has_size(s)) {
        ctx.output.warn(&format!("{} doesn't list size {}", product.name, size));
    }
    if let Some(color) = color.as_deref().filter(|c| !product.has_color(c)) {
        ctx.output.warn(&format!("{} doesn't list color {}", product.name, color));
    }

    let name = product.name.clone();
    let mut cart = ctx.cart()?;
    match cart.add_item(product, quantity, size, color)? {
        Some(line_id) => {
            ctx.output.debug(&format!("line {}", line_id));
            ctx.toast(Severity::Success, format!("Added {} to your cart", name));
        }
        None => ctx.toast(Severity::Warning, format!("{} was not added", name)),
    }

    if ctx.output.is_json() {
        print_cart(&cart, ctx)?;
    }
    Ok(())
}

fn remove_item(line: &str, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;
    if cart.remove_item(&LineId::new(line))? {
        ctx.toast(Severity::Info, "Item removed from your cart");
    } else {
        ctx.output.info(&format!("No cart line {}", line));
    }

    if ctx.output.is_json() {
        print_cart(&cart, ctx)?;
    }
    Ok(())
}

fn set_quantity(line: &str, quantity: i64, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;
    let line_id = LineId::new(line);
    if !cart.set_quantity(&line_id, quantity)? {
        ctx.output.info(&format!("No cart line {}", line));
    } else if quantity <= 0 {
        ctx.toast(Severity::Info, "Item removed from your cart");
    } else {
        match cart.state().line(&line_id) {
            Some(l) => ctx.toast(Severity::Success, format!("Quantity updated to {}", l.quantity)),
            None => ctx.toast(Severity::Warning, "Item is out of stock and was removed"),
        }
    }

    if ctx.output.is_json() {
        print_cart(&cart, ctx)?;
    }
    Ok(())
}

fn clear_cart(yes: bool, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;
    if cart.state().is_empty() {
        ctx.output.info("Your cart is already empty.");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} items from your cart?", cart.state().item_count()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    cart.clear()?;
    ctx.toast(Severity::Info, "Cart cleared");
    Ok(())
}
