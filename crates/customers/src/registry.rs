//! Customer registry collaborator interface.

use std::sync::Arc;

use cartwright_core::StoreResult;

use crate::customer::Customer;

/// Persistence collaborator for customers.
///
/// No storage assumptions: in-memory implementations serve tests/dev, and
/// integrators may back this with any storage technology.
pub trait CustomerRegistry: Send + Sync {
    /// Whether a customer with this phone number is already registered.
    fn exists(&self, phone: &str) -> StoreResult<bool>;

    /// Persist a customer, assigning an identifier on first save.
    fn save(&self, customer: &mut Customer) -> StoreResult<bool>;

    /// Remove a customer, located by id-only identity.
    fn delete(&self, customer: &Customer) -> StoreResult<()>;
}

impl<R> CustomerRegistry for Arc<R>
where
    R: CustomerRegistry + ?Sized,
{
    fn exists(&self, phone: &str) -> StoreResult<bool> {
        (**self).exists(phone)
    }

    fn save(&self, customer: &mut Customer) -> StoreResult<bool> {
        (**self).save(customer)
    }

    fn delete(&self, customer: &Customer) -> StoreResult<()> {
        (**self).delete(customer)
    }
}
