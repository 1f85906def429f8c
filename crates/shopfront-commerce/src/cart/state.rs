//! Cart state and its transitions.
//!
//! `CartState` knows nothing about storage. Every mutation is available
//! both as a `&mut self` method and as a [`CartAction`] fed through
//! [`CartState::apply`].

use crate::cart::{CartLine, CartLineKey, CartTotals, PricingRules};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{LineId, ProductId};
use serde::{Deserialize, Serialize};

/// How `add_item` and `set_quantity` treat tracked inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InventoryPolicy {
    /// Quantities are not checked against inventory.
    #[default]
    Unchecked,
    /// Line quantities are capped at the product's inventory.
    ClampToStock,
}

/// A cart transition.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Add {
        product: Product,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    },
    Remove(LineId),
    SetQuantity {
        line_id: LineId,
        quantity: i64,
    },
    Clear,
}

impl CartAction {
    /// Add `quantity` of a product in the given variant.
    pub fn add(
        product: Product,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    ) -> Self {
        CartAction::Add {
            product,
            quantity,
            size,
            color,
        }
    }
}

/// The cart's line items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    lines: Vec<CartLine>,
    policy: InventoryPolicy,
}

impl CartState {
    /// An empty cart.
    pub fn new(policy: InventoryPolicy) -> Self {
        Self {
            lines: Vec::new(),
            policy,
        }
    }

    /// Rebuild a cart from stored lines.
    ///
    /// Zero-quantity lines are dropped and lines sharing a key are merged,
    /// so a hand-edited or stale document still yields a valid cart. Under
    /// [`InventoryPolicy::ClampToStock`] merged quantities are capped at the
    /// snapshot's inventory and sold-out lines are dropped.
    pub fn from_lines(lines: Vec<CartLine>, policy: InventoryPolicy) -> Self {
        let mut state = Self::new(policy);
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            let key = line.key();
            match state.position(&key) {
                Some(index) => {
                    if let Some(existing) = state.lines.get_mut(index) {
                        existing.quantity = existing.quantity.saturating_add(line.quantity);
                    }
                }
                None => state.lines.push(CartLine::new(key, line.product, line.quantity)),
            }
        }
        for line in &mut state.lines {
            line.quantity = cap(policy, line.quantity, line.product.inventory);
        }
        state.lines.retain(|l| l.quantity > 0);
        state
    }

    /// Apply an action, returning the next state.
    pub fn apply(mut self, action: CartAction) -> Self {
        match action {
            CartAction::Add {
                product,
                quantity,
                size,
                color,
            } => {
                self.add_item(product, quantity, size, color);
            }
            CartAction::Remove(line_id) => {
                self.remove_item(&line_id);
            }
            CartAction::SetQuantity { line_id, quantity } => {
                self.set_quantity(&line_id, quantity);
            }
            CartAction::Clear => self.clear(),
        }
        self
    }

    /// Add a product to the cart.
    ///
    /// Adding a (product, size, color) key that is already in the cart
    /// increments that line. Returns the affected line id, or `None` when
    /// nothing changed (zero quantity, or no stock under
    /// [`InventoryPolicy::ClampToStock`]).
    pub fn add_item(
        &mut self,
        product: Product,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    ) -> Option<LineId> {
        if quantity == 0 {
            return None;
        }

        let key = CartLineKey::new(product.id.clone(), size, color);
        let policy = self.policy;

        if let Some(index) = self.position(&key) {
            let line = self.lines.get_mut(index)?;
            let wanted = line.quantity.saturating_add(quantity);
            let capped = cap(policy, wanted, line.product.inventory);
            if capped == 0 {
                tracing::debug!(line = %line.id, "dropping sold-out line");
                self.lines.remove(index);
                return None;
            }
            line.quantity = capped;
            return Some(line.id.clone());
        }

        let quantity = cap(policy, quantity, product.inventory);
        if quantity == 0 {
            tracing::debug!(product = %product.id, "not adding out-of-stock product");
            return None;
        }

        let line = CartLine::new(key, product, quantity);
        let id = line.id.clone();
        self.lines.push(line);
        Some(id)
    }

    /// Remove a line. Returns false if it wasn't there.
    pub fn remove_item(&mut self, line_id: &LineId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != line_id);
        self.lines.len() < len_before
    }

    /// Overwrite a line's quantity; zero or less removes the line, as does
    /// a sold-out product under [`InventoryPolicy::ClampToStock`].
    ///
    /// Returns false if the line doesn't exist.
    pub fn set_quantity(&mut self, line_id: &LineId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(line_id);
        }

        let policy = self.policy;
        let Some(index) = self.lines.iter().position(|l| &l.id == line_id) else {
            return false;
        };
        let wanted = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = cap(policy, wanted, line.product.inventory);
            if line.quantity == 0 {
                tracing::debug!(line = %line_id, "dropping sold-out line");
                self.lines.remove(index);
            }
        }
        true
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whether any line references the product, whatever its variant.
    pub fn contains_product(&self, product_id: &ProductId) -> bool {
        self.lines.iter().any(|l| &l.product.id == product_id)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Consume the state, returning its lines.
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    pub fn policy(&self) -> InventoryPolicy {
        self.policy
    }

    /// Get a line by id.
    pub fn line(&self, line_id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    /// Get the line for a key.
    pub fn line_for(&self, key: &CartLineKey) -> Option<&CartLine> {
        self.position(key).and_then(|index| self.lines.get(index))
    }

    /// Total quantity of a product across all its variants.
    pub fn quantity_of(&self, product_id: &ProductId) -> u64 {
        self.lines
            .iter()
            .filter(|l| &l.product.id == product_id)
            .map(|l| u64::from(l.quantity))
            .sum()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines whose quantity is above the product's inventory.
    pub fn lines_over_inventory(&self) -> Vec<&CartLine> {
        self.lines.iter().filter(|l| l.exceeds_inventory()).collect()
    }

    /// Subtotal, tax, shipping and total for the current lines.
    pub fn totals(&self, rules: &PricingRules) -> Result<CartTotals, CommerceError> {
        CartTotals::calculate(&self.lines, rules)
    }

    fn position(&self, key: &CartLineKey) -> Option<usize> {
        self.lines.iter().position(|l| {
            l.product.id == key.product_id
                && l.selected_size == key.size
                && l.selected_color == key.color
        })
    }
}

fn cap(policy: InventoryPolicy, quantity: u32, inventory: u32) -> u32 {
    match policy {
        InventoryPolicy::Unchecked => quantity,
        InventoryPolicy::ClampToStock => quantity.min(inventory),
    }
}
