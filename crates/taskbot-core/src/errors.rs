//! Cross-cutting error types for TaskBot.
//!
//! Store-specific errors (`DatabaseError`) live in `taskbot-db`, and the HTTP
//! mapping lives in `taskbot-server`. `CoreError` covers what can go wrong
//! before a record ever reaches the store.

use thiserror::Error;

/// Errors that can be raised by any TaskBot crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (missing field, bad format, out of range).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
