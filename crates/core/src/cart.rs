//! Session-scoped shopping cart.
//!
//! A cart is an insertion-ordered list of lines. A line is one purchasable
//! configuration: a materialized product plus a quantity and an optional
//! free-text observation ("sem cebola"). Two additions of the same product
//! with the same normalized observation merge into one line; a different
//! observation creates a distinct line with its own identity.
//!
//! There is exactly one logical writer per cart (the session that owns it),
//! so operations need no internal synchronization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Product;
use crate::types::LineId;

/// Errors from cart operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Quantity must be at least 1; zero is rejected rather than clamped.
    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

/// One distinct purchasable configuration in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Identity of this line, distinct from the product ID.
    pub line_id: LineId,
    /// The product this line was created from, copied at add time.
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
    /// Normalized customer note: trimmed, never empty when present.
    pub observation: Option<String>,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Ordered collection of cart lines, owned by a single UI session.
///
/// Serializable so the storefront can park it in the session store between
/// requests; discarded when the session ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Add a product to the cart.
    ///
    /// The observation is normalized first (trimmed; empty becomes "no
    /// observation"). If a line already exists for the same product and
    /// normalized observation, its quantity is increased and its identity
    /// preserved; otherwise a new line is appended.
    ///
    /// Returns the identity of the affected line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is zero.
    pub fn add_item(
        &mut self,
        product: Product,
        quantity: u32,
        observation: Option<&str>,
    ) -> Result<LineId, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let observation = normalize_observation(observation);

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id && line.observation == observation)
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return Ok(existing.line_id);
        }

        let line_id = LineId::generate();
        self.lines.push(CartLine {
            line_id,
            product,
            quantity,
            observation,
        });
        Ok(line_id)
    }

    /// Remove a line by identity. Removing an absent line is a no-op.
    pub fn remove_item(&mut self, line_id: LineId) {
        self.lines.retain(|line| line.line_id != line_id);
    }

    /// Adjust a line's quantity by `delta`, floor-guarded at 1.
    ///
    /// A decrement that would reach zero or below leaves the line unchanged;
    /// lines are only ever removed through [`Cart::remove_item`]. Updating
    /// an absent line is a no-op.
    pub fn update_quantity(&mut self, line_id: LineId, delta: i64) {
        let Some(line) = self.lines.iter_mut().find(|line| line.line_id == line_id) else {
            return;
        };
        let updated = i64::from(line.quantity) + delta;
        if updated >= 1 {
            line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `price * quantity` across all lines.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Trim the observation and canonicalize emptiness to `None`, so "", "  ",
/// and an absent observation all compare equal for line identity.
fn normalize_observation(observation: Option<&str>) -> Option<String> {
    observation
        .map(str::trim)
        .filter(|obs| !obs.is_empty())
        .map(str::to_owned)
}
