//! Code review use case

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::{CodeReviewReport, CompletionRequest, LlmError, LlmProvider};
use crate::infrastructure::prompts::{CODE_REVIEW_SYSTEM_PROMPT, build_review_prompt};

pub struct ReviewCodeUseCase {
    provider: Arc<dyn LlmProvider>,
}

impl ReviewCodeUseCase {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Send one review request and return the demonstration report.
    ///
    /// The model reply is only required to arrive; its content is not parsed.
    #[instrument(skip(self, code), fields(code_len = code.len(), provider = self.provider.info().id))]
    pub async fn execute(&self, code: &str, language: &str) -> Result<CodeReviewReport, LlmError> {
        let request = CompletionRequest::new()
            .with_model(self.provider.default_model())
            .with_system(CODE_REVIEW_SYSTEM_PROMPT)
            .with_user(build_review_prompt(code, language));

        let response = self
            .provider
            .complete(request)
            .await
            .inspect_err(|e| warn!(error = %e, retryable = e.is_retryable(), "Code review request failed"))?;

        info!(
            response_len = response.text().len(),
            model = %response.model,
            "Received code review response"
        );

        Ok(CodeReviewReport::demonstration())
    }
}
