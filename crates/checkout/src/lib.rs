//! Checkout domain module.
//!
//! This crate contains the per-customer shopping cart and the purchase
//! protocol that reconciles cart contents against live inventory.

pub mod cart;
pub mod service;
pub mod store;

pub use cart::{Cart, CartError, CartLine};
pub use service::{CheckoutService, PurchaseError};
pub use store::InventoryStore;
