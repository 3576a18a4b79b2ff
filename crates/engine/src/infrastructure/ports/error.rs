//! Error types for port operations.

/// Actor store errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Entity not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Store operation failed - includes operation name for tracing.
    #[error("Store error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },
}

impl RepoError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DiceError {
    #[error("Dice device unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid dice formula: {0}")]
    InvalidFormula(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageError {
    #[error("Message sink rejected message: {0}")]
    Rejected(String),
}
