//! Unified error types for the domain layer
//!
//! The rules themselves are total (bonus resolution and the ladder never fail),
//! so this only covers identifiers, lookups and value-object construction.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Operation requires a different kind of actor
    #[error("Wrong actor kind: expected {expected}")]
    WrongActorKind { expected: &'static str },
}

impl DomainError {
    /// Creates a validation error for rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if max < 1 {
    ///     return Err(DomainError::validation("max strikes must be at least 1"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a wrong actor kind error
    pub fn wrong_actor_kind(expected: &'static str) -> Self {
        Self::WrongActorKind { expected }
    }
}
