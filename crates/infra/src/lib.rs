//! Infrastructure layer: store implementations backing the domain's
//! collaborator interfaces.

pub mod in_memory;


pub use in_memory::{InMemoryCustomerRegistry, InMemoryInventory};
