//! Inventory store collaborator interface.

use std::sync::Arc;

use cartwright_catalog::{Product, ProductName};
use cartwright_core::StoreResult;

/// Persistence collaborator for the product catalog.
///
/// No storage assumptions: in-memory implementations serve tests/dev, and
/// integrators may back this with any storage technology. The store is the
/// single arena owning product state; readers get snapshots and writers put
/// updated snapshots back via [`InventoryStore::save`].
pub trait InventoryStore: Send + Sync {
    /// All products currently in the catalog.
    fn get_all(&self) -> StoreResult<Vec<Product>>;

    /// Look up one product by its name key.
    fn get_by_name(&self, name: &ProductName) -> StoreResult<Option<Product>>;

    /// Persist a product's current state (upsert by name).
    fn save(&self, product: &Product) -> StoreResult<bool>;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn get_all(&self) -> StoreResult<Vec<Product>> {
        (**self).get_all()
    }

    fn get_by_name(&self, name: &ProductName) -> StoreResult<Option<Product>> {
        (**self).get_by_name(name)
    }

    fn save(&self, product: &Product) -> StoreResult<bool> {
        (**self).save(product)
    }
}
