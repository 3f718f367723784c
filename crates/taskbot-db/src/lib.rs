//! # taskbot-db
//!
//! libSQL record store for TaskBot.
//!
//! Holds the single `robots` table behind list/get/create/update/delete by
//! integer id, plus the batch operations the planner needs (daily expansion,
//! group delete, group manual toggle), each run in one transaction.
//!
//! Uses the `libsql` crate: a local file (or `:memory:`) by default, or a
//! remote libSQL/Turso database when configured.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle: one libSQL database and the connection opened on it.
pub struct BotDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl BotDb {
    /// Open a local database at the given path.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let bot_db = Self {
            db,
            conn,
            remote: false,
        };
        bot_db.run_migrations().await?;
        tracing::debug!(path, "opened local robot store");
        Ok(bot_db)
    }

    /// Open a remote libSQL database over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection or migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let bot_db = Self {
            db,
            conn,
            remote: true,
        };
        bot_db.run_migrations().await?;
        tracing::debug!(url, "opened remote robot store");
        Ok(bot_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }
}
