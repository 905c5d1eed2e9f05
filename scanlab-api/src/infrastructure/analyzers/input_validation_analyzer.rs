//! Input validation analyzer

use scanlab_core::Severity;

use crate::domain::entities::ApiFinding;
use crate::domain::value_objects::{ApiVulnerabilityType, SpecDocument, SpecNode};

/// Analyzer for parameters and request bodies without schemas
pub struct InputValidationAnalyzer;

impl InputValidationAnalyzer {
    pub fn analyze(doc: &SpecDocument) -> Vec<ApiFinding> {
        let mut findings = Vec::new();

        for operation in doc.operations() {
            for parameter in operation.node.get("parameters").items() {
                if parameter.get("schema").is_truthy() || parameter.get("type").is_truthy() {
                    continue;
                }

                findings.push(ApiFinding {
                    severity: Severity::Medium,
                    vulnerability_type: ApiVulnerabilityType::InputValidation,
                    description: format!(
                        "Parameter {} lacks schema definition",
                        parameter_label(parameter)
                    ),
                    path: format!("{}.parameters", operation.locator()),
                    recommendation: "Define schema with proper type and format constraints"
                        .to_string(),
                });
            }

            let request_body = operation.node.get("requestBody");
            if request_body.is_truthy()
                && !request_body
                    .get("content")
                    .get("application/json")
                    .get("schema")
                    .is_truthy()
            {
                findings.push(ApiFinding {
                    severity: Severity::Medium,
                    vulnerability_type: ApiVulnerabilityType::InputValidation,
                    description: format!(
                        "Request body schema missing in {}",
                        operation.display_name()
                    ),
                    path: format!("{}.requestBody", operation.locator()),
                    recommendation:
                        "Define request body schema with proper validation constraints"
                            .to_string(),
                });
            }
        }

        findings
    }
}

fn parameter_label<'a>(parameter: SpecNode<'a>) -> &'a str {
    parameter.get("name").as_str().unwrap_or("unnamed")
}
