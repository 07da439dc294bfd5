//! Store-level error model.

use thiserror::Error;

/// Result type used by the persistence collaborator interfaces.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a backing store.
///
/// Keep this opaque to the domain: a store failure carries a message, never a
/// backend-specific type. Deterministic business failures (validation,
/// invariants) live in the domain crates instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store failed or rejected the operation.
    #[error("store failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
