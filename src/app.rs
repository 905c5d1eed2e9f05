//! Application setup and wiring

use axum::Router;
use scanlab_core::Config;

use crate::presentation::{AppState, create_router};

/// Build the application router from configuration.
///
/// A missing reviewer configuration is not fatal; the review route answers
/// with a configuration error instead.
pub fn create_app(config: &Config) -> Router {
    let state = AppState::from_config(config);

    if state.review_code_use_case.is_err() {
        tracing::warn!("GPT reviewer is not configured; /api/v1/analyze/gpt will return 503");
    }

    tracing::info!(
        enabled_analyzers = ?config.api_security.enabled_analyzers,
        excluded_paths = config.api_security.exclude_paths.len(),
        "Application state initialized"
    );

    create_router(state, config)
}
