use std::collections::HashMap;
use std::sync::RwLock;

use cartwright_catalog::{Product, ProductName};
use cartwright_checkout::InventoryStore;
use cartwright_core::{StoreError, StoreResult};
use cartwright_customers::{Customer, CustomerId, CustomerRegistry};

/// In-memory product store.
///
/// Intended for tests/dev. The table is the canonical arena for product
/// state; `save` upserts by name key.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    products: RwLock<HashMap<ProductName, Product>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial catalog.
    pub fn stocked(products: impl IntoIterator<Item = Product>) -> Self {
        let table = products
            .into_iter()
            .map(|p| (p.name().clone(), p))
            .collect();
        Self {
            products: RwLock::new(table),
        }
    }
}

impl InventoryStore for InMemoryInventory {
    fn get_all(&self) -> StoreResult<Vec<Product>> {
        let table = self
            .products
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(table.values().cloned().collect())
    }

    fn get_by_name(&self, name: &ProductName) -> StoreResult<Option<Product>> {
        let table = self
            .products
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(table.get(name).cloned())
    }

    fn save(&self, product: &Product) -> StoreResult<bool> {
        let mut table = self
            .products
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        table.insert(product.name().clone(), product.clone());
        Ok(true)
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    customers: HashMap<CustomerId, Customer>,
    next_id: i64,
}

/// In-memory customer registry.
///
/// Intended for tests/dev. Emulates a database-generated key: the first save
/// of an unpersisted customer assigns the next positive id.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRegistry {
    inner: RwLock<RegistryInner>,
}

impl InMemoryCustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerRegistry for InMemoryCustomerRegistry {
    fn exists(&self, phone: &str) -> StoreResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(inner.customers.values().any(|c| c.phone() == phone))
    }

    fn save(&self, customer: &mut Customer) -> StoreResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        if !customer.id().is_assigned() {
            inner.next_id += 1;
            customer.assign_id(CustomerId::new(inner.next_id));
        }
        inner.customers.insert(customer.id(), customer.clone());
        Ok(true)
    }

    fn delete(&self, customer: &Customer) -> StoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        inner.customers.remove(&customer.id());
        Ok(())
    }
}
