//! # taskbot-config
//!
//! Layered configuration loading for TaskBot using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKBOT_*` prefix, `__` as separator)
//! 2. Project-level `.taskbot/config.toml`
//! 3. User-level `~/.config/taskbot/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKBOT_SERVER__PORT` -> `server.port`,
//! `TASKBOT_DATABASE__PATH` -> `database.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use taskbot_config::TaskBotConfig;
//!
//! let config = TaskBotConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.address());
//! ```

mod database;
mod error;
mod general;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskBotConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TaskBotConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".taskbot/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TASKBOT_").split("__"))
    }

    /// Reject values that would only fail later at request time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.bind".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.general.description_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.description_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.database.path.is_empty() && !self.database.is_remote() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must be set when no remote database is configured".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskbot").join("config.toml"))
    }
}
