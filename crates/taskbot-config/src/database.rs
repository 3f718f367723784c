//! Record store configuration.
//!
//! A local libSQL file by default. When both `url` and `auth_token` are set
//! the store talks to a remote libSQL/Turso database instead.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "taskbot.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://taskbot-org.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Check if the remote database has the minimum required fields.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "taskbot.db");
        assert!(!config.is_remote());
    }

    #[test]
    fn remote_needs_url_and_token() {
        let mut config = DatabaseConfig {
            url: "libsql://taskbot-org.turso.io".into(),
            ..Default::default()
        };
        assert!(!config.is_remote());

        config.auth_token = "token123".into();
        assert!(config.is_remote());
    }
}
