use std::sync::Arc;

use crate::auth::TokenKeys;
use crate::config::AppConfig;
use crate::database::Repository;

/// Application context built once at startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Arc<dyn Repository>,
    pub tokens: TokenKeys,
}

impl AppState {
    pub fn new(config: AppConfig, repository: Arc<dyn Repository>, tokens: TokenKeys) -> Self {
        Self {
            config: Arc::new(config),
            repository,
            tokens,
        }
    }
}
