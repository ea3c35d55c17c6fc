//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// key conflicts). Absence of a record is not an error: lookups return
/// `Option`, never `Err`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An insert collided with a key already present in the catalog.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_key(name: impl Into<String>) -> Self {
        Self::DuplicateKey(name.into())
    }
}
