//! Customers domain module.
//!
//! This crate contains the customer entity, the registry collaborator
//! interface, and the registration routine.

pub mod customer;
pub mod registration;
pub mod registry;

pub use customer::{Customer, CustomerId};
pub use registration::{RegistrationError, RegistrationService};
pub use registry::CustomerRegistry;
