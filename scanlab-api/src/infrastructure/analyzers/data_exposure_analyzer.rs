//! Sensitive data exposure analyzer

use scanlab_core::Severity;

use crate::domain::entities::ApiFinding;
use crate::domain::value_objects::{ApiVulnerabilityType, SpecDocument};

/// Substrings that mark a response schema as potentially sensitive
pub const SENSITIVE_KEYWORDS: [&str; 8] = [
    "password", "token", "secret", "key", "auth", "credit", "ssn", "social",
];

/// Analyzer for sensitive fields in JSON response schemas
pub struct DataExposureAnalyzer;

impl DataExposureAnalyzer {
    pub fn analyze(doc: &SpecDocument) -> Vec<ApiFinding> {
        let mut findings = Vec::new();

        for operation in doc.operations() {
            for (code, response) in operation.node.get("responses").entries() {
                let schema = response
                    .get("content")
                    .get("application/json")
                    .get("schema");
                if !schema.is_truthy() {
                    continue;
                }

                let haystack = schema.to_compact_string().to_lowercase();
                // One finding per matched keyword
                for keyword in SENSITIVE_KEYWORDS {
                    if haystack.contains(keyword) {
                        findings.push(ApiFinding {
                            severity: Severity::Medium,
                            vulnerability_type: ApiVulnerabilityType::DataExposure,
                            description: format!(
                                "Potential sensitive data exposure in {} response",
                                operation.display_name()
                            ),
                            path: format!("{}.responses.{}", operation.locator(), code),
                            recommendation:
                                "Review response schema and ensure sensitive data is not exposed"
                                    .to_string(),
                        });
                    }
                }
            }
        }

        findings
    }
}
