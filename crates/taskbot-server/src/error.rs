//! Error types for the HTTP gateway.

use taskbot_db::error::DatabaseError;
use thiserror::Error;

/// Failures of the server itself: binding, accepting, joining the accept thread.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("accept loop failed: {0}")]
    Join(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A request that could not be served, carrying the status it maps to.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// `allow` is the `Allow` header value for the path.
    #[error("Method {method} Not Allowed")]
    MethodNotAllowed { method: String, allow: &'static str },

    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::Internal(_) => 500,
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(error: DatabaseError) -> Self {
        if error.is_validation() {
            Self::BadRequest(error.to_string())
        } else if error.is_not_found() {
            Self::NotFound(error.to_string())
        } else {
            Self::Internal(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::BadRequest(format!("invalid JSON body: {error}"))
    }
}
