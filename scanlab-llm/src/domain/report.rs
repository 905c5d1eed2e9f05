//! Code review report returned to callers

use scanlab_core::Severity;
use serde::{Deserialize, Serialize};

/// One reviewed issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewIssue {
    pub severity: Severity,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub description: String,
    pub line: u32,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeReviewReport {
    pub valid: bool,
    pub overall_risk: Severity,
    pub issues: Vec<ReviewIssue>,
    pub suggestions: Vec<String>,
    pub secure_code_example: String,
}

impl CodeReviewReport {
    /// The fixed demonstration report
    pub fn demonstration() -> Self {
        Self {
            valid: true,
            overall_risk: Severity::Medium,
            issues: vec![
                ReviewIssue {
                    severity: Severity::High,
                    issue_type: "Input Validation".to_string(),
                    description: "User input is not properly sanitized before processing"
                        .to_string(),
                    line: 15,
                    recommendation:
                        "Use input validation libraries or implement strict validation"
                            .to_string(),
                },
                ReviewIssue {
                    severity: Severity::Medium,
                    issue_type: "Authentication".to_string(),
                    description: "Weak password requirements in authentication logic"
                        .to_string(),
                    line: 23,
                    recommendation: "Implement strong password policies and use secure hashing"
                        .to_string(),
                },
            ],
            suggestions: vec![
                "Implement proper input validation".to_string(),
                "Use secure authentication methods".to_string(),
                "Follow secure coding guidelines".to_string(),
                "Regular security audits".to_string(),
            ],
            secure_code_example: "// Example of secure implementation\n\
                                  function validateInput(userInput) {\n  \
                                  // Sanitize and validate input\n  \
                                  return sanitizedInput;\n\
                                  }"
            .to_string(),
        }
    }
}
