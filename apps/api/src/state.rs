use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::evaluation::scorer::QualityEvaluator;
use crate::generation::generator::EmailGenerator;
use crate::generation::pipeline::EmailDrafter;
use crate::llm_client::{self, LlmClient};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Remote drafter tried before the template generator. `None` when no API key is configured.
    pub drafter: Option<Arc<dyn EmailDrafter>>,
    pub generator: EmailGenerator,
    pub evaluator: QualityEvaluator,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        let drafter: Option<Arc<dyn EmailDrafter>> = match &config.openai_api_key {
            Some(key) => {
                let client = LlmClient::new(key.clone(), &config.openai_base_url)?;
                info!(
                    "LLM drafter enabled (model: {}, timeout: {:?})",
                    llm_client::MODEL,
                    config.llm_timeout
                );
                Some(Arc::new(client))
            }
            None => {
                info!("OPENAI_API_KEY not set; emails come from the template generator only");
                None
            }
        };

        Ok(AppState {
            config,
            drafter,
            generator: EmailGenerator,
            evaluator: QualityEvaluator::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_api_key_means_no_drafter() {
        let state = AppState::from_config(Config::default()).unwrap();
        assert!(state.drafter.is_none());
    }

    #[test]
    fn test_api_key_enables_drafter() {
        let config = Config {
            openai_api_key: Some("sk-test".to_string()),
            ..Config::default()
        };
        let state = AppState::from_config(config).unwrap();
        assert!(state.drafter.is_some());
    }
}
