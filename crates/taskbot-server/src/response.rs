//! Transport-neutral responses.
//!
//! Route handlers produce an `ApiResponse`; the server loop converts it into a
//! `tiny_http::Response` at the last moment so handlers stay testable without
//! a socket.

use serde::Serialize;
use taskbot_core::responses::ErrorBody;

use crate::error::ApiError;

pub const CONFLICT_HEADER: &str = "X-Schedule-Conflict";
pub const ROBOTS_ALLOW: &str = "GET, POST, PUT, DELETE";
pub const CONFLICTS_ALLOW: &str = "GET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                headers: vec![("Content-Type".into(), "application/json".into())],
                body,
            },
            Err(error) => ApiError::Internal(error.to_string()).into(),
        }
    }

    #[must_use]
    pub const fn no_content() -> Self {
        Self {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn into_tiny(self) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
        let mut response = tiny_http::Response::from_string(self.body).with_status_code(self.status);
        for (name, value) in &self.headers {
            match tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()) {
                Ok(header) => response.add_header(header),
                Err(()) => tracing::warn!(%name, "dropping invalid response header"),
            }
        }
        response
    }
}

impl From<ApiError> for ApiResponse {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::MethodNotAllowed { allow, .. } => Self {
                status: error.status(),
                headers: vec![
                    ("Allow".into(), allow.into()),
                    ("Content-Type".into(), "text/plain".into()),
                ],
                body: error.to_string(),
            },
            ApiError::Internal(ref detail) => {
                tracing::error!(%detail, "request failed");
                Self::json(error.status(), &ErrorBody::new(error.to_string()))
            }
            _ => Self::json(error.status(), &ErrorBody::new(error.to_string())),
        }
    }
}
