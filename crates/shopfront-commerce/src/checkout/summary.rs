//! Order summary shown after placing an order.

use crate::cart::{CartLine, CartState, CartTotals, PricingRules};
use crate::checkout::{Address, CheckoutForm};
use crate::error::CommerceError;
use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A confirmed order. Built in memory only; nothing is charged or stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub email: String,
    pub ship_to: Address,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub placed_at: DateTime<Utc>,
}

impl OrderSummary {
    /// Validate the form and snapshot the cart into an order.
    ///
    /// An empty cart is rejected before the form is looked at.
    pub fn build(cart: &CartState, rules: &PricingRules, form: &CheckoutForm) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        form.validate().map_err(CommerceError::InvalidForm)?;
        let totals = cart.totals(rules)?;

        let summary = Self {
            order_id: OrderId::generate(),
            email: form.email.trim().to_string(),
            ship_to: form.shipping.clone(),
            lines: cart.lines().to_vec(),
            totals,
            placed_at: Utc::now(),
        };
        tracing::debug!(
            order = %summary.order_id,
            items = summary.totals.item_count,
            total = %summary.totals.total,
            "order summary built"
        );
        Ok(summary)
    }

    pub fn item_count(&self) -> u64 {
        self.totals.item_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn form() -> CheckoutForm {
        CheckoutForm::new(
            " jane@example.com ",
            Address::new("Jane", "Smith", "456 Oak Ave", "Los Angeles", "90001", "US"),
        )
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let err = OrderSummary::build(&CartState::default(), &PricingRules::default(), &form()).unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[test]
    fn test_invalid_form_is_rejected() {
        let mut cart = CartState::default();
        cart.add_item(Product::new("tee", "Tee", Money::usd(2000)), 1, None, None);

        let err = OrderSummary::build(&cart, &PricingRules::default(), &CheckoutForm::default()).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidForm(ref e) if e.has("email")));
    }

    #[test]
    fn test_summary_snapshots_cart() {
        let mut cart = CartState::default();
        cart.add_item(Product::new("tee", "Tee", Money::usd(2000)), 2, Some("M".into()), None);
        cart.add_item(Product::new("mug", "Mug", Money::usd(3500)), 1, None, None);

        let summary = OrderSummary::build(&cart, &PricingRules::default(), &form()).unwrap();
        assert!(summary.order_id.as_str().starts_with("SF-"));
        assert_eq!(summary.email, "jane@example.com");
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.item_count(), 3);
        assert_eq!(summary.totals.total, Money::usd(9250));
    }
}
