//! Display currency commands.

use anyhow::Result;
use serde_json::json;
use shopfront_commerce::currency::CurrencyState;
use shopfront_commerce::money::Currency;
use shopfront_commerce::notify::Severity;
use shopfront_commerce::Money;

use super::{CurrencyArgs, CurrencyCommand};
use crate::context::Context;

/// Run the currency command.
pub fn run(args: CurrencyArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CurrencyCommand::Show) | None => show(ctx),
        Some(CurrencyCommand::List) => list(ctx),
        Some(CurrencyCommand::Set { code }) => set(&code, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let currency = ctx.currency()?.selected();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "code": currency.code(),
            "symbol": currency.symbol(),
            "name": currency.name(),
            "rate": currency.rate().to_string(),
        }));
        return Ok(());
    }

    ctx.output.kv("currency", &format!("{} ({})", currency.name(), currency.code()));
    ctx.output.kv("rate", &format!("1 USD = {} {}", currency.rate(), currency.code()));
    Ok(())
}

fn list(ctx: &Context) -> Result<()> {
    let selected = ctx.currency()?.selected();

    if ctx.output.is_json() {
        let all: Vec<_> = Currency::ALL
            .iter()
            .map(|c| json!({ "code": c.code(), "symbol": c.symbol(), "name": c.name(), "selected": *c == selected }))
            .collect();
        ctx.output.json(&all);
        return Ok(());
    }

    ctx.output.header("Currencies");
    let sample = Money::usd(10_000);
    for currency in Currency::ALL {
        let marker = if currency == selected { "*" } else { " " };
        let example = CurrencyState::new(currency).format(&sample);
        ctx.output.table_row(
            &[marker, currency.code(), currency.name(), example.as_str()],
            &[1, 4, 22, 14],
        );
    }
    Ok(())
}

fn set(code: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.currency()?;
    let selected = store.select(code)?;
    if !selected.code().eq_ignore_ascii_case(code.trim()) {
        ctx.output.warn(&format!("Unknown currency '{}', using {}", code, selected.code()));
    }
    ctx.toast(Severity::Success, format!("Prices now shown in {}", selected.code()));

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "code": selected.code() }));
    }
    Ok(())
}
