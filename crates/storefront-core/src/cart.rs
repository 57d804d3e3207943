//! Shopping cart store.
//!
//! Lines are unique per product and keep insertion order. Quantities stay in
//! `1..=max_quantity`; removing a line is an explicit operation.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CartError;
use crate::product::{Product, ProductId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    #[serde(skip, default = "default_max_quantity")]
    max_quantity: u32,
}

fn default_max_quantity() -> u32 {
    crate::config::StorefrontConfig::default().max_quantity
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(default_max_quantity())
    }
}

impl Cart {
    pub fn new(max_quantity: u32) -> Self {
        Self {
            lines: Vec::new(),
            max_quantity: max_quantity.max(1),
        }
    }

    /// Restore persisted lines under the current quantity cap.
    pub fn with_lines(lines: Vec<CartLine>, max_quantity: u32) -> Self {
        let mut cart = Self::new(max_quantity);
        for line in lines {
            if line.quantity == 0 || cart.get(line.product.id).is_some() {
                continue;
            }
            let quantity = line.quantity.min(cart.max_quantity);
            cart.lines.push(CartLine { quantity, ..line });
        }
        cart
    }

    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    fn get_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product.id == id)
    }

    /// Add one unit of `product`, capped at the maximum quantity.
    pub fn add(&mut self, product: Product) {
        let max = self.max_quantity;
        match self.get_mut(product.id) {
            Some(line) => line.quantity = (line.quantity + 1).min(max),
            None => {
                debug!(id = %product.id, "adding product to cart");
                self.lines.push(CartLine {
                    product,
                    quantity: 1,
                });
            }
        }
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        before != self.lines.len()
    }

    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> Result<(), CartError> {
        let max = self.max_quantity;
        if quantity == 0 || quantity > max {
            return Err(CartError::InvalidQuantity { quantity, max });
        }
        let line = self.get_mut(id).ok_or(CartError::UnknownProduct(id))?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn increment(&mut self, id: ProductId) -> Result<(), CartError> {
        let max = self.max_quantity;
        let line = self.get_mut(id).ok_or(CartError::UnknownProduct(id))?;
        line.quantity = (line.quantity + 1).min(max);
        Ok(())
    }

    /// Decrease by one, never below 1.
    pub fn decrement(&mut self, id: ProductId) -> Result<(), CartError> {
        let line = self.get_mut(id).ok_or(CartError::UnknownProduct(id))?;
        line.quantity = line.quantity.saturating_sub(1).max(1);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Tax on the subtotal, rounded half away from zero to cents.
    pub fn tax(&self, rate: Decimal) -> Decimal {
        (self.subtotal() * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Subtotal plus tax. Shipping is free.
    pub fn total(&self, rate: Decimal) -> Decimal {
        self.subtotal() + self.tax(rate)
    }
}
