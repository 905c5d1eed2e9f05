//! Pattern scanning entities

use scanlab_core::Severity;
use serde::{Deserialize, Serialize};

use super::value_objects::{CodeRisk, CodeVulnerabilityType};

/// Source code finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFinding {
    pub severity: Severity,
    #[serde(rename = "type")]
    pub vulnerability_type: CodeVulnerabilityType,
    /// 1-based line of the first match; 0 when no single line matches
    pub line: usize,
    pub description: String,
    pub recommendation: String,
}

/// Result of scanning one source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAnalysisReport {
    pub vulnerabilities: Vec<CodeFinding>,
    pub suggestions: Vec<String>,
    pub overall_risk: CodeRisk,
    pub secure_code_example: Option<String>,
}
