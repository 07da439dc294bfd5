//! Purchase orchestration.
//!
//! `CheckoutService` composes an [`InventoryStore`] and executes the purchase
//! protocol: re-validate each cart line against live stock, decrement, and
//! persist, line by line.
//!
//! ## Atomicity
//!
//! The purchase is atomic **per line**, not per cart: validation for a line
//! happens immediately before that line's stock moves, and a failure aborts
//! before touching the failing line, but lines already committed in the same
//! call stay committed. Integrators that need whole-cart atomicity must wrap
//! the call in their own transaction.

use thiserror::Error;
use tracing::{debug, info};

use cartwright_catalog::{Product, ProductName};
use cartwright_core::{StoreError, StoreResult};

use crate::cart::Cart;
use crate::store::InventoryStore;

/// Purchase failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// A cart line's quantity exceeds the product's live stock.
    #[error("insufficient stock of '{product}' to complete the purchase")]
    InsufficientStock { product: String },

    /// A cart line references a product the catalog no longer has.
    #[error("product '{product}' is not in the catalog")]
    UnknownProduct { product: String },

    /// The backing store failed; propagated as-is.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Checkout/purchase service over an [`InventoryStore`].
#[derive(Debug)]
pub struct CheckoutService<S> {
    inventory: S,
}

impl<S> CheckoutService<S>
where
    S: InventoryStore,
{
    pub fn new(inventory: S) -> Self {
        Self { inventory }
    }

    /// All products currently in the catalog.
    pub fn all_products(&self) -> StoreResult<Vec<Product>> {
        self.inventory.get_all()
    }

    /// Look up one product by name.
    pub fn product_by_name(&self, name: &ProductName) -> StoreResult<Option<Product>> {
        self.inventory.get_by_name(name)
    }

    /// Validate and commit a cart against live inventory.
    ///
    /// Outcomes:
    /// - absent cart, empty cart, or any negative line quantity →
    ///   `Ok(false)` with zero store writes (silent skip, never an error);
    /// - a line over live stock → [`PurchaseError::InsufficientStock`]
    ///   naming the product, with earlier lines left committed;
    /// - full success → every line's stock decremented and saved, the cart
    ///   cleared, `Ok(true)`.
    pub fn purchase(&self, cart: Option<&mut Cart>) -> Result<bool, PurchaseError> {
        let Some(cart) = cart else {
            debug!("purchase skipped: no cart");
            return Ok(false);
        };
        if cart.is_empty() {
            debug!(
                customer_id = cart.customer().id().value(),
                "purchase skipped: empty cart"
            );
            return Ok(false);
        }
        // Whole-cart check: one negative quantity invalidates the purchase
        // before any stock moves.
        if cart.lines().iter().any(|line| line.quantity < 0) {
            debug!(
                customer_id = cart.customer().id().value(),
                "purchase skipped: negative quantity in cart"
            );
            return Ok(false);
        }

        for line in cart.lines() {
            let mut product = self
                .inventory
                .get_by_name(&line.product)?
                .ok_or_else(|| PurchaseError::UnknownProduct {
                    product: line.product.to_string(),
                })?;

            product
                .decrement_count(line.quantity)
                .map_err(|_| PurchaseError::InsufficientStock {
                    product: line.product.to_string(),
                })?;

            self.inventory.save(&product)?;
        }

        info!(
            customer_id = cart.customer().id().value(),
            lines = cart.lines().len(),
            "purchase committed"
        );
        cart.clear();
        Ok(true)
    }
}
