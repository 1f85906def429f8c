//! Cart totals.
//!
//! Totals are a pure function of the line list and are recomputed on every
//! read. Nothing here is cached.

use crate::cart::CartLine;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Default sales tax: 10%.
pub const TAX_RATE_BPS: u32 = 1_000;
/// Default free-shipping threshold: $100.00.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 10_000;
/// Default flat shipping fee: $10.00.
pub const FLAT_SHIPPING_CENTS: i64 = 1_000;

/// Tax and shipping rules applied to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Tax rate in basis points (1000 = 10%).
    pub tax_rate_bps: u32,
    /// Subtotal at or above which shipping is free.
    pub free_shipping_threshold: Money,
    /// Shipping fee below the threshold.
    pub flat_shipping: Money,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            tax_rate_bps: TAX_RATE_BPS,
            free_shipping_threshold: Money::usd(FREE_SHIPPING_THRESHOLD_CENTS),
            flat_shipping: Money::usd(FLAT_SHIPPING_CENTS),
        }
    }
}

impl PricingRules {
    /// Shipping charged for a given subtotal.
    pub fn shipping_for(&self, subtotal: &Money) -> Money {
        if subtotal.amount_cents >= self.free_shipping_threshold.amount_cents {
            Money::zero(subtotal.currency)
        } else {
            self.flat_shipping
        }
    }
}

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of price x quantity.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Shipping fee.
    pub shipping: Money,
    /// subtotal + tax + shipping.
    pub total: Money,
}

impl CartTotals {
    /// Calculate totals for a line list.
    ///
    /// An empty line list ships nothing. Returns an error only on
    /// arithmetic overflow.
    pub fn calculate(lines: &[CartLine], rules: &PricingRules) -> Result<Self, CommerceError> {
        let line_totals = lines
            .iter()
            .map(|line| line.line_total().ok_or(CommerceError::Overflow))
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal =
            Money::try_sum(line_totals.iter(), Currency::USD).ok_or(CommerceError::Overflow)?;
        let tax = subtotal
            .basis_points(rules.tax_rate_bps)
            .ok_or(CommerceError::Overflow)?;
        let shipping = if lines.is_empty() {
            Money::zero(subtotal.currency)
        } else {
            rules.shipping_for(&subtotal)
        };
        let total = subtotal
            .try_add(&tax)
            .and_then(|m| m.try_add(&shipping))
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            item_count: lines.iter().map(|l| u64::from(l.quantity)).sum(),
            subtotal,
            tax,
            shipping,
            total,
        })
    }

    /// Whether the shipping fee was waived.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// How much more needs to be added to reach free shipping.
    pub fn amount_to_free_shipping(&self, rules: &PricingRules) -> Money {
        let gap = rules.free_shipping_threshold.amount_cents - self.subtotal.amount_cents;
        Money::new(gap.max(0), self.subtotal.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLineKey;
    use crate::catalog::Product;

    fn line(id: &str, price_cents: i64, quantity: u32) -> CartLine {
        let product = Product::new(id, id, Money::usd(price_cents));
        CartLine::new(CartLineKey::new(product.id.clone(), None, None), product, quantity)
    }

    #[test]
    fn test_totals_below_free_shipping() {
        let lines = vec![line("a", 2000, 2), line("b", 3500, 1)];
        let totals = CartTotals::calculate(&lines, &PricingRules::default()).unwrap();

        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.subtotal, Money::usd(7500));
        assert_eq!(totals.tax, Money::usd(750));
        assert_eq!(totals.shipping, Money::usd(1000));
        assert_eq!(totals.total, Money::usd(9250));
        assert_eq!(
            totals.amount_to_free_shipping(&PricingRules::default()),
            Money::usd(2500)
        );
    }

    #[test]
    fn test_totals_with_free_shipping() {
        let lines = vec![line("a", 12000, 1)];
        let totals = CartTotals::calculate(&lines, &PricingRules::default()).unwrap();

        assert_eq!(totals.subtotal, Money::usd(12000));
        assert_eq!(totals.tax, Money::usd(1200));
        assert_eq!(totals.shipping, Money::usd(0));
        assert_eq!(totals.total, Money::usd(13200));
        assert!(totals.has_free_shipping());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let lines = vec![line("a", 10000, 1)];
        let totals = CartTotals::calculate(&lines, &PricingRules::default()).unwrap();
        assert!(totals.shipping.is_zero());
        assert!(totals.amount_to_free_shipping(&PricingRules::default()).is_zero());
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = CartTotals::calculate(&[], &PricingRules::default()).unwrap();
        assert_eq!(totals.item_count, 0);
        assert!(totals.subtotal.is_zero());
        assert!(totals.shipping.is_zero());
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_zero_priced_line_still_pays_shipping() {
        let totals = CartTotals::calculate(&[line("freebie", 0, 1)], &PricingRules::default())
            .unwrap();
        assert!(totals.subtotal.is_zero());
        assert_eq!(totals.shipping, Money::usd(1000));
        assert_eq!(totals.total, Money::usd(1000));
        assert!(!totals.has_free_shipping());
    }

    #[test]
    fn test_shipping_for_follows_threshold() {
        let rules = PricingRules::default();
        assert_eq!(rules.shipping_for(&Money::usd(0)), Money::usd(1000));
        assert_eq!(rules.shipping_for(&Money::usd(9999)), Money::usd(1000));
        assert!(rules.shipping_for(&Money::usd(10000)).is_zero());
    }

    #[test]
    fn test_custom_rules() {
        let rules = PricingRules {
            tax_rate_bps: 825,
            free_shipping_threshold: Money::usd(5000),
            flat_shipping: Money::usd(599),
        };
        let totals = CartTotals::calculate(&[line("a", 4000, 1)], &rules).unwrap();
        assert_eq!(totals.tax, Money::usd(330));
        assert_eq!(totals.shipping, Money::usd(599));
        assert_eq!(totals.total, Money::usd(4929));
    }

    #[test]
    fn test_overflow_is_reported() {
        let lines = vec![line("a", i64::MAX / 2, 3)];
        assert!(matches!(
            CartTotals::calculate(&lines, &PricingRules::default()),
            Err(CommerceError::Overflow)
        ));
    }
}
