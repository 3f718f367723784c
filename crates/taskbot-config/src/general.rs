//! General application configuration.

use serde::{Deserialize, Serialize};
use taskbot_core::DEFAULT_DESCRIPTION_LIMIT;

const fn default_description_limit() -> usize {
    DEFAULT_DESCRIPTION_LIMIT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Maximum description length accepted on create/update.
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            description_limit: default_description_limit(),
        }
    }
}
