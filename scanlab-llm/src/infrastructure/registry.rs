//! Provider construction from configuration

use std::sync::Arc;

use scanlab_core::config::LlmConfig;
use tracing::info;

use crate::domain::{LlmError, LlmProvider};
use crate::infrastructure::providers::OpenAIProvider;

pub const MISSING_CONFIGURATION_MESSAGE: &str = "GPT API configuration is missing. Please set SCANLAB__LLM__ENDPOINT and SCANLAB__LLM__API_KEY in your environment.";

/// Build the review provider, failing when endpoint or credential is absent
pub fn provider_from_config(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let (Some(endpoint), Some(api_key)) = (
        config.endpoint.as_deref().map(str::trim).filter(|v| !v.is_empty()),
        config.api_key.as_deref().map(str::trim).filter(|v| !v.is_empty()),
    ) else {
        return Err(LlmError::Configuration(
            MISSING_CONFIGURATION_MESSAGE.to_string(),
        ));
    };

    info!(endpoint = %endpoint, model = %config.model, "Configured OpenAI-compatible provider");

    Ok(Arc::new(
        OpenAIProvider::new(endpoint, api_key, config.model.clone())
            .with_timeout(config.timeout_seconds),
    ))
}
