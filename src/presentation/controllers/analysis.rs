//! Pattern scan and specification scan controllers

use axum::{Json, extract::State};
use scanlab_api::{AnalysisOutcome, ParseFailure};
use scanlab_sast::CodeAnalysisReport;
use tracing::info;

use crate::presentation::controllers::AppState;
use crate::presentation::models::{AnalyzeCodeRequest, AnalyzeSpecRequest};

/// POST /api/v1/analyze/code - Run the pattern probes over source text
pub async fn analyze_code(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeCodeRequest>,
) -> Json<CodeAnalysisReport> {
    let report = state
        .analyze_code_use_case
        .execute(&request.code, &request.language);

    info!(
        language = %request.language,
        finding_count = report.vulnerabilities.len(),
        "Code analysis completed"
    );

    Json(report)
}

/// POST /api/v1/analyze/openapi - Scan an OpenAPI or Swagger document.
///
/// Unparseable or invalid documents still answer 200 with `{valid: false, error}`.
pub async fn analyze_openapi(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeSpecRequest>,
) -> Json<AnalysisOutcome> {
    let outcome = match state.scan_spec_use_case.execute(&request.content) {
        Ok(report) => AnalysisOutcome::from(report),
        Err(error) => AnalysisOutcome::from(ParseFailure::from(&error)),
    };

    Json(outcome)
}
