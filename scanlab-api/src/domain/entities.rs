//! API security domain entities

use scanlab_core::Severity;
use serde::{Deserialize, Serialize};

use super::value_objects::ApiVulnerabilityType;

/// API security finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFinding {
    pub severity: Severity,
    #[serde(rename = "type")]
    pub vulnerability_type: ApiVulnerabilityType,
    pub description: String,
    /// Dot-delimited locator into the document, e.g. `paths./users.get`
    pub path: String,
    pub recommendation: String,
}

/// Successful analysis of a specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub valid: bool,
    pub overall_risk: Severity,
    pub issues: Vec<ApiFinding>,
    pub recommendations: Vec<String>,
}

/// Terminal result when loading or structural validation fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    pub valid: bool,
    pub error: String,
}

impl ParseFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: error.into(),
        }
    }
}

/// Either shape the caller renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Report(AnalysisReport),
    Failure(ParseFailure),
}

impl AnalysisOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, AnalysisOutcome::Report(_))
    }
}

impl From<AnalysisReport> for AnalysisOutcome {
    fn from(report: AnalysisReport) -> Self {
        AnalysisOutcome::Report(report)
    }
}

impl From<ParseFailure> for AnalysisOutcome {
    fn from(failure: ParseFailure) -> Self {
        AnalysisOutcome::Failure(failure)
    }
}

impl<E: std::fmt::Display> From<Result<AnalysisReport, E>> for AnalysisOutcome {
    fn from(result: Result<AnalysisReport, E>) -> Self {
        match result {
            Ok(report) => AnalysisOutcome::Report(report),
            Err(error) => AnalysisOutcome::Failure(ParseFailure::new(error.to_string())),
        }
    }
}
