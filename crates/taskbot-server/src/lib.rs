//! # taskbot-server
//!
//! HTTP gateway for TaskBot.
//!
//! Exposes the record store as a single resource, `/api/robots`, dispatched on
//! method (GET list, POST create, PUT update, DELETE remove), plus a read-only
//! `/api/robots/conflicts` check. Built on `tiny_http`; see [`Server`].
//!
//! Route handling is transport-free ([`routes::handle`] returns an
//! [`ApiResponse`]) so it can be tested without binding a socket.

pub mod error;
pub mod payload;
pub mod response;
pub mod routes;
mod server;

pub use error::{ApiError, ServerError};
pub use response::ApiResponse;
pub use server::{Server, ShutdownHandle};
