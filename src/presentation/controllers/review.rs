//! GPT code review controller

use axum::{Json, extract::State, http::StatusCode, response::Response};
use scanlab_llm::CodeReviewReport;
use tracing::warn;

use crate::presentation::controllers::{AppState, error_response};
use crate::presentation::models::AnalyzeCodeRequest;

/// POST /api/v1/analyze/gpt - Send the code to the configured reviewer
pub async fn review_code(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeCodeRequest>,
) -> Result<Json<CodeReviewReport>, Response> {
    let use_case = state.review_code_use_case.as_ref().map_err(|e| {
        error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "CONFIGURATION_ERROR",
            &e.to_string(),
        )
    })?;

    let report = use_case
        .execute(&request.code, &request.language)
        .await
        .map_err(|e| {
            warn!(error = %e, "GPT review failed");
            error_response(StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", &e.to_string())
        })?;

    Ok(Json(report))
}
