use serde::{Deserialize, Serialize};
use thiserror::Error;

use cartwright_catalog::{Product, ProductName};
use cartwright_customers::Customer;

/// Cart-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The requested quantity (combined with what the cart already holds)
    /// exceeds the product's known stock.
    #[error("cannot add '{product}' to cart: the needed quantity is not available")]
    InsufficientStock { product: String },
}

/// Cart line: product key plus the accumulated requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: ProductName,
    pub quantity: i64,
}

/// Per-customer accumulation of requested product quantities.
///
/// Carts reference products by name key into the catalog rather than holding
/// product state; stock is consulted at add time and re-validated against the
/// live store at purchase time. Lines keep insertion order, one per product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    customer: Customer,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart bound to one customer.
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            lines: Vec::new(),
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Read-only view of the cart's lines.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity currently recorded for a product (zero when absent).
    pub fn quantity_of(&self, name: &ProductName) -> i64 {
        self.lines
            .iter()
            .find(|line| line.product == *name)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Record `quantity` of `product`, accumulating with any existing line.
    ///
    /// Fails when the combined requested quantity exceeds the product's
    /// current count; the cart is unchanged on failure. The quantity's sign
    /// is not checked here; a negative entry fails the purchase instead
    /// (permissive add contract).
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<(), CartError> {
        let wanted = self.quantity_of(product.name()) + quantity;
        if wanted > product.count() {
            return Err(CartError::InsufficientStock {
                product: product.name().to_string(),
            });
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.product == *product.name())
        {
            Some(line) => line.quantity = wanted,
            None => self.lines.push(CartLine {
                product: product.name().clone(),
                quantity,
            }),
        }
        Ok(())
    }

    /// Empty the cart. Only a fully successful purchase does this.
    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}
