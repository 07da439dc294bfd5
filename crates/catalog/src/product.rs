use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cartwright_core::Entity;

/// Catalog-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A stock movement would take the count below zero.
    #[error("insufficient stock of '{product}': requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: i64,
        available: i64,
    },
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Product identifier: the catalog-unique product name.
///
/// Products are keyed by name; carts and stores reference products through
/// this key rather than through shared object identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Create a validated product name. Rejects blank names.
    pub fn new(name: impl Into<String>) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::validation("product name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductName {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Catalog item: a named product with a live available-quantity counter.
///
/// Invariant: `count` never goes negative. The only mutation path is
/// [`Product::decrement_count`], which validates before subtracting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: ProductName,
    count: i64,
}

impl Product {
    /// Create a product with an initial stock count.
    pub fn new(name: ProductName, count: i64) -> Result<Self, CatalogError> {
        if count < 0 {
            return Err(CatalogError::validation("initial count cannot be negative"));
        }
        Ok(Self { name, count })
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Subtract `amount` from the available count, in place.
    ///
    /// Rejects a negative `amount` and any amount exceeding the current
    /// count; the count is unchanged on failure.
    pub fn decrement_count(&mut self, amount: i64) -> Result<(), CatalogError> {
        if amount < 0 {
            return Err(CatalogError::validation("decrement amount cannot be negative"));
        }
        if amount > self.count {
            return Err(CatalogError::InsufficientStock {
                product: self.name.to_string(),
                requested: amount,
                available: self.count,
            });
        }
        self.count -= amount;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ProductName {
        ProductName::new(s).unwrap()
    }

    #[test]
    fn new_product_holds_initial_count() {
        let product = Product::new(name("Milk"), 3).unwrap();
        assert_eq!(product.name().as_str(), "Milk");
        assert_eq!(product.count(), 3);
    }

    #[test]
    fn product_name_rejects_blank() {
        let err = ProductName::new("   ").unwrap_err();
        match err {
            CatalogError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn new_product_rejects_negative_count() {
        let err = Product::new(name("Milk"), -1).unwrap_err();
        match err {
            CatalogError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn decrement_subtracts_in_place() {
        let mut product = Product::new(name("Milk"), 3).unwrap();
        product.decrement_count(1).unwrap();
        assert_eq!(product.count(), 2);
    }

    #[test]
    fn decrement_to_zero_is_allowed() {
        let mut product = Product::new(name("Tea"), 2).unwrap();
        product.decrement_count(2).unwrap();
        assert_eq!(product.count(), 0);
    }

    #[test]
    fn decrement_rejects_more_than_available() {
        let mut product = Product::new(name("Tea"), 1).unwrap();
        let err = product.decrement_count(3).unwrap_err();
        match err {
            CatalogError::InsufficientStock {
                product: p,
                requested,
                available,
            } => {
                assert_eq!(p, "Tea");
                assert_eq!(requested, 3);
                assert_eq!(available, 1);
            }
            other => panic!("expected InsufficientStock error, got {other:?}"),
        }
        // Count unchanged on failure.
        assert_eq!(product.count(), 1);
    }

    #[test]
    fn decrement_rejects_negative_amount() {
        let mut product = Product::new(name("Tea"), 1).unwrap();
        let err = product.decrement_count(-1).unwrap_err();
        match err {
            CatalogError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
        assert_eq!(product.count(), 1);
    }

    #[test]
    fn insufficient_stock_message_names_the_product() {
        let mut product = Product::new(name("Tea"), 1).unwrap();
        let err = product.decrement_count(3).unwrap_err();
        assert!(err.to_string().contains("Tea"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: no sequence of decrements ever drives the count
            /// negative, and accepted decrements account exactly for the
            /// count delta.
            #[test]
            fn count_never_goes_negative(
                initial in 0i64..10_000,
                amounts in proptest::collection::vec(-100i64..1_000, 0..50)
            ) {
                let mut product = Product::new(
                    ProductName::new("Widget").unwrap(),
                    initial,
                ).unwrap();

                let mut accepted: i64 = 0;
                for amount in amounts {
                    if product.decrement_count(amount).is_ok() {
                        accepted += amount;
                    }
                    prop_assert!(product.count() >= 0);
                }

                prop_assert_eq!(product.count(), initial - accepted);
            }

            /// Property: a decrement is rejected exactly when it is negative
            /// or exceeds the current count.
            #[test]
            fn decrement_rejected_iff_invalid(
                initial in 0i64..1_000,
                amount in -1_000i64..2_000
            ) {
                let mut product = Product::new(
                    ProductName::new("Widget").unwrap(),
                    initial,
                ).unwrap();

                let result = product.decrement_count(amount);
                if amount < 0 || amount > initial {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(product.count(), initial);
                } else {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(product.count(), initial - amount);
                }
            }
        }
    }
}
