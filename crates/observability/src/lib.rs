//! Observability: logging/tracing wiring for processes embedding the
//! checkout domain.

pub mod tracing;

/// Initialize observability for the process.
pub fn init() {
    tracing::init();
}
