//! HTTP controllers

pub mod analysis;
pub mod health;
pub mod review;

use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scanlab_api::ScanApiSpecificationUseCase;
use scanlab_core::Config;
use scanlab_llm::{LlmError, LlmProvider, ReviewCodeUseCase, provider_from_config};
use scanlab_sast::AnalyzeCodeUseCase;

use crate::presentation::models::ErrorResponse;

/// Shared state for every controller
#[derive(Clone)]
pub struct AppState {
    pub analyze_code_use_case: Arc<AnalyzeCodeUseCase>,
    pub scan_spec_use_case: Arc<ScanApiSpecificationUseCase>,
    /// The configuration error is kept so the review route can report it
    pub review_code_use_case: Result<Arc<ReviewCodeUseCase>, LlmError>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let review_code_use_case = provider_from_config(&config.llm)
            .map(|provider| Arc::new(ReviewCodeUseCase::new(provider)));

        Self {
            analyze_code_use_case: Arc::new(AnalyzeCodeUseCase::new()),
            scan_spec_use_case: Arc::new(ScanApiSpecificationUseCase::with_config(
                &config.api_security,
            )),
            review_code_use_case,
        }
    }

    /// Replace the review backend
    pub fn with_review_provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.review_code_use_case = Ok(Arc::new(ReviewCodeUseCase::new(provider)));
        self
    }
}

pub(crate) fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    let body = Json(ErrorResponse {
        code: code.to_string(),
        message: message.to_string(),
    });

    (status, body).into_response()
}
