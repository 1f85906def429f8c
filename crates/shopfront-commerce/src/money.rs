//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. Catalog prices are
//! always held in [`Currency::USD`], the canonical unit; other currencies
//! only appear at display time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    CNY,
    INR,
    MXN,
}

impl Currency {
    /// Every supported currency, in display order.
    pub const ALL: [Currency; 10] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CAD,
        Currency::AUD,
        Currency::CHF,
        Currency::CNY,
        Currency::INR,
        Currency::MXN,
    ];

    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
            Currency::CNY => "CNY",
            Currency::INR => "INR",
            Currency::MXN => "MXN",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::CHF => "CHF",
            Currency::CNY => "\u{00a5}",
            Currency::INR => "\u{20b9}",
            Currency::MXN => "MX$",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Currency::USD => "US Dollar",
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound",
            Currency::JPY => "Japanese Yen",
            Currency::CAD => "Canadian Dollar",
            Currency::AUD => "Australian Dollar",
            Currency::CHF => "Swiss Franc",
            Currency::CNY => "Chinese Yuan",
            Currency::INR => "Indian Rupee",
            Currency::MXN => "Mexican Peso",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Static exchange rate: units of this currency per one US dollar.
    pub fn rate(&self) -> Decimal {
        match self {
            Currency::USD => Decimal::ONE,
            Currency::EUR => Decimal::new(92, 2),
            Currency::GBP => Decimal::new(79, 2),
            Currency::JPY => Decimal::new(14950, 2),
            Currency::CAD => Decimal::new(136, 2),
            Currency::AUD => Decimal::new(152, 2),
            Currency::CHF => Decimal::new(88, 2),
            Currency::CNY => Decimal::new(724, 2),
            Currency::INR => Decimal::new(8312, 2),
            Currency::MXN => Decimal::new(1705, 2),
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "CHF" => Some(Currency::CHF),
            "CNY" => Some(Currency::CNY),
            "INR" => Some(Currency::INR),
            "MXN" => Some(Currency::MXN),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// US dollar cents, the canonical catalog unit.
    pub fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value in major units.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.amount_cents, self.currency.decimal_places())
    }

    /// Plain display without grouping (e.g., "$49.99").
    ///
    /// Storefront pages go through
    /// [`CurrencyState::format`](crate::currency::CurrencyState::format)
    /// instead; this is for logs and debugging.
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.to_decimal())
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by a quantity.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// A share of this amount in basis points (1000 bps = 10%), rounded
    /// half up to the nearest cent.
    pub fn basis_points(&self, bps: u32) -> Option<Money> {
        let scaled = i128::from(self.amount_cents) * i128::from(bps);
        let rounded = (scaled + 5_000) / 10_000;
        i64::try_from(rounded)
            .ok()
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Sum an iterator of Money values, returning None on currency
    /// mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.amount_cents, 4999);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_money_to_decimal() {
        assert_eq!(Money::usd(4999).to_decimal(), Decimal::new(4999, 2));
        assert_eq!(Money::new(100, Currency::JPY).to_decimal(), Decimal::from(100));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(4999).display(), "$49.99");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
    }

    #[test]
    fn test_money_addition() {
        let c = Money::usd(1000).try_add(&Money::usd(500)).unwrap();
        assert_eq!(c.amount_cents, 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let c = Money::usd(1000).try_subtract(&Money::usd(300)).unwrap();
        assert_eq!(c.amount_cents, 700);
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!(Money::usd(1000).try_multiply(2).unwrap().amount_cents, 2000);
        assert!(Money::usd(i64::MAX).try_multiply(2).is_none());
    }

    #[test]
    fn test_basis_points() {
        // 10% of $75.00
        assert_eq!(Money::usd(7500).basis_points(1000).unwrap().amount_cents, 750);
        // 10% of $0.05 rounds half up
        assert_eq!(Money::usd(5).basis_points(1000).unwrap().amount_cents, 1);
        assert_eq!(Money::usd(4).basis_points(1000).unwrap().amount_cents, 0);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
    }

    #[test]
    fn test_try_sum() {
        let amounts = [Money::usd(4000), Money::usd(3500)];
        assert_eq!(
            Money::try_sum(amounts.iter(), Currency::USD).unwrap().amount_cents,
            7500
        );
        assert_eq!(
            Money::try_sum(std::iter::empty(), Currency::USD).unwrap(),
            Money::zero(Currency::USD)
        );
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }

    #[test]
    fn test_usd_rate_is_one() {
        assert_eq!(Currency::USD.rate(), Decimal::ONE);
        assert!(Currency::ALL.iter().all(|c| c.rate() > Decimal::ZERO));
    }
}
