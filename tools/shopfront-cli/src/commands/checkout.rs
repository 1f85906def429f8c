//! Checkout command.

use anyhow::Result;
use shopfront_commerce::checkout::{Address, CheckoutForm, OrderSummary};
use shopfront_commerce::notify::Severity;
use shopfront_commerce::CommerceError;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let keep_cart = args.keep_cart;
    let form = build_form(args);
    let mut cart = ctx.cart()?;

    let order = match OrderSummary::build(cart.state(), &ctx.pricing(), &form) {
        Ok(order) => order,
        Err(CommerceError::EmptyCart) => {
            ctx.output.info("Your cart is empty. Add something with `shopfront cart add`.");
            return Ok(());
        }
        Err(CommerceError::InvalidForm(errors)) => {
            for error in errors.errors() {
                ctx.output.warn(&error.to_string());
            }
            anyhow::bail!("Please fix {} field(s) and try again", errors.errors().len());
        }
        Err(e) => return Err(e.into()),
    };

    if !keep_cart {
        cart.clear()?;
    }

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    let currency = *ctx.currency()?.state();
    ctx.output.header(&format!("Order {}", order.order_id));
    ctx.output.kv("placed", &order.placed_at.format("%Y-%m-%d %H:%M UTC").to_string());
    ctx.output.kv("email", &order.email);
    ctx.output.line("");
    for line in order.ship_to.multi_line().lines() {
        ctx.output.line(&format!("  {}", line));
    }
    ctx.output.line("");
    for line in &order.lines {
        let total = line
            .line_total()
            .map(|t| currency.format(&t))
            .unwrap_or_default();
        let name = match line.variant_label() {
            Some(variant) => format!("{} ({})", line.product.name, variant),
            None => line.product.name.clone(),
        };
        ctx.output.list_item(&format!("{} x{} {}", name, line.quantity, total));
    }
    ctx.output.line("");
    ctx.output.kv("subtotal", &currency.format(&order.totals.subtotal));
    ctx.output.kv("tax", &currency.format(&order.totals.tax));
    ctx.output.kv("shipping", &currency.format(&order.totals.shipping));
    ctx.output.kv("total", &currency.format(&order.totals.total));

    ctx.toast(Severity::Success, "Thanks! Your order has been placed.");
    Ok(())
}

fn build_form(args: CheckoutArgs) -> CheckoutForm {
    let mut shipping = Address::new(
        args.first_name,
        args.last_name,
        args.address1,
        args.city,
        args.zip,
        args.country,
    );
    shipping.address2 = args.address2;
    shipping.state = args.state;

    CheckoutForm {
        email: args.email,
        phone: args.phone,
        shipping,
    }
}
