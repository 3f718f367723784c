use std::sync::Arc;

use anyhow::Context;
use taskbot_config::TaskBotConfig;
use taskbot_db::service::RobotService;

use crate::cli::GlobalFlags;

/// Resources opened once at startup and shared by every command.
pub struct AppContext {
    pub service: Arc<RobotService>,
    pub config: TaskBotConfig,
}

impl AppContext {
    pub async fn init(mut config: TaskBotConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        apply_overrides(&mut config, flags);

        let service = RobotService::from_config(&config).await.with_context(|| {
            if config.database.is_remote() {
                format!("failed to open remote database {}", config.database.url)
            } else {
                format!("failed to open database {}", config.database.path)
            }
        })?;

        Ok(Self {
            service: Arc::new(service),
            config,
        })
    }
}

/// `--db` always selects a local file, even when a remote URL is configured.
fn apply_overrides(config: &mut TaskBotConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.db {
        config.database.path.clone_from(path);
        config.database.url.clear();
        config.database.auth_token.clear();
    }
}
