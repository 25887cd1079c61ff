use std::sync::Arc;

use crate::config::Config;
use crate::translate::{DeepLClient, TranslationGateway, TranslationProvider};

/// Shared, read-only handler state. Cloning only bumps reference counts
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Arc<TranslationGateway>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let deepl = DeepLClient::from_config(&config.deepl)?;
        Ok(Self::with_provider(config, Arc::new(deepl)))
    }

    /// Build state around any provider, e.g. a fake upstream in tests
    pub fn with_provider(config: Config, provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            config: Arc::new(config),
            gateway: Arc::new(TranslationGateway::new(provider)),
        }
    }
}
