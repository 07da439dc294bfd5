use serde::{Deserialize, Serialize};

use cartwright_core::Entity;

/// Customer identifier assigned by the persistence layer.
///
/// `0` means "not yet persisted"; a store assigns a positive id on first
/// save.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Identifier of a customer that has not been persisted yet.
    pub const UNASSIGNED: CustomerId = CustomerId(0);

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Customer: a registered (or soon-to-be-registered) shopper.
///
/// The phone number is the registration uniqueness key. Identity comparisons
/// go through [`Customer::same_identity`] (id only); the derived `PartialEq`
/// compares all fields and is deliberately a different relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    phone: String,
}

impl Customer {
    pub fn new(id: CustomerId, phone: impl Into<String>) -> Self {
        Self {
            id,
            phone: phone.into(),
        }
    }

    /// A customer that has not been persisted yet.
    pub fn unregistered(phone: impl Into<String>) -> Self {
        Self::new(CustomerId::UNASSIGNED, phone)
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Assign the persisted identifier. Called by stores on first save.
    pub fn assign_id(&mut self, id: CustomerId) {
        self.id = id;
    }

    /// Identity comparison: by id only.
    ///
    /// Two customers with the same id are the same customer even when their
    /// other fields differ; cart ownership and registry deletes rely on this.
    pub fn same_identity(&self, other: &Customer) -> bool {
        self.id == other.id
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
