//! Customer registration routine.

use thiserror::Error;
use tracing::{info, warn};

use cartwright_core::StoreResult;

use crate::customer::Customer;
use crate::registry::CustomerRegistry;

/// Registration failure surfaced to callers.
///
/// Deliberately carries one fixed human-readable message; the underlying
/// store failure is logged, never exposed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to add customer")]
pub struct RegistrationError;

/// Registration routine over a [`CustomerRegistry`].
#[derive(Debug)]
pub struct RegistrationService<R> {
    registry: R,
}

impl<R> RegistrationService<R>
where
    R: CustomerRegistry,
{
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Register a customer, failing closed on duplicate phone numbers.
    ///
    /// Returns `Ok(false)` without attempting a save when the phone number is
    /// already registered; otherwise returns the store's save result. Any
    /// store failure is re-signaled as [`RegistrationError`].
    pub fn add_customer(&self, customer: &mut Customer) -> Result<bool, RegistrationError> {
        match self.try_add(customer) {
            Ok(added) => {
                if added {
                    info!(customer_id = customer.id().value(), "customer registered");
                }
                Ok(added)
            }
            Err(e) => {
                warn!("customer registration failed: {e}");
                Err(RegistrationError)
            }
        }
    }

    fn try_add(&self, customer: &mut Customer) -> StoreResult<bool> {
        if self.registry.exists(customer.phone())? {
            return Ok(false);
        }
        self.registry.save(customer)
    }
}
