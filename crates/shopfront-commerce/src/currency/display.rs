//! Conversion and locale-aware formatting.

use crate::money::{Currency, Money};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// The selected display currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyState {
    selected: Currency,
}

impl CurrencyState {
    pub fn new(selected: Currency) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> Currency {
        self.selected
    }

    /// Select a currency by code, case-insensitively. Unknown codes fall
    /// back to USD.
    pub fn select(&mut self, code: &str) -> Currency {
        self.selected = Currency::from_code(code).unwrap_or_else(|| {
            tracing::debug!(code, "unknown currency code, falling back to USD");
            Currency::USD
        });
        self.selected
    }

    /// Convert an amount into the selected currency, rounded half away
    /// from zero to its minor unit.
    pub fn convert(&self, amount: &Money) -> Money {
        convert(amount, self.selected)
    }

    /// Convert and render an amount with the currency's symbol, grouping
    /// and decimal places (e.g. "$1,234.50", "¥11,250").
    pub fn format(&self, amount: &Money) -> String {
        format_money(&self.convert(amount))
    }
}

/// Convert between currencies through the USD rate table.
pub fn convert(amount: &Money, target: Currency) -> Money {
    if amount.currency == target {
        return *amount;
    }
    let usd = match amount.to_decimal().checked_div(amount.currency.rate()) {
        Some(usd) => usd,
        None => return Money::zero(target),
    };
    let places = target.decimal_places();
    let major = (usd * target.rate()).round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let minor = major
        .checked_mul(Decimal::from(10_i64.pow(places)))
        .and_then(|m| m.to_i64())
        .unwrap_or_else(|| {
            tracing::warn!(%major, currency = %target, "converted amount out of range");
            0
        });
    Money::new(minor, target)
}

/// Render an amount using the ISO currency's formatting rules, falling back
/// to the plain symbol form for codes the formatter doesn't know.
pub fn format_money(amount: &Money) -> String {
    match rusty_money::iso::find(amount.currency.code()) {
        Some(iso) => rusty_money::Money::from_minor(amount.amount_cents, iso).to_string(),
        None => amount.display(),
    }
}
