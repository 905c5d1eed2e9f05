//! Request and response DTOs

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "javascript".to_string()
}

/// Body of `POST /api/v1/analyze/code` and `POST /api/v1/analyze/gpt`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzeCodeRequest {
    pub code: String,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Body of `POST /api/v1/analyze/openapi`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzeSpecRequest {
    /// Raw JSON or YAML specification text
    pub content: String,
}

/// Error response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
