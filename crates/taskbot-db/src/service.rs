//! Service layer wrapping the database handle.
//!
//! `RobotService` owns the `BotDb` and the write-time limits. All repo
//! methods are implemented as `impl RobotService` blocks under `repos/`.

use taskbot_config::TaskBotConfig;
use taskbot_core::DEFAULT_DESCRIPTION_LIMIT;

use crate::BotDb;
use crate::error::DatabaseError;

/// Record store gateway shared by the HTTP server and the CLI.
///
/// Opened once per process and shared behind an `Arc`.
pub struct RobotService {
    db: BotDb,
    description_limit: usize,
}

impl RobotService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(BotDb::open_local(db_path).await?))
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be reached.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(BotDb::open_remote(url, auth_token).await?))
    }

    /// Open the store the configuration points at.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &TaskBotConfig) -> Result<Self, DatabaseError> {
        let service = if config.database.is_remote() {
            Self::new_remote(&config.database.url, &config.database.auth_token).await?
        } else {
            Self::new_local(&config.database.path).await?
        };
        Ok(service.with_description_limit(config.general.description_limit))
    }

    /// Create from an existing `BotDb` (for testing).
    #[must_use]
    pub const fn from_db(db: BotDb) -> Self {
        Self {
            db,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }

    #[must_use]
    pub const fn with_description_limit(mut self, limit: usize) -> Self {
        self.description_limit = limit;
        self
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &BotDb {
        &self.db
    }

    #[must_use]
    pub const fn description_limit(&self) -> usize {
        self.description_limit
    }
}
