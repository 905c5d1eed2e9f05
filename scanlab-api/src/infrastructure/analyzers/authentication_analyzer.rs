//! Authentication security analyzer

use scanlab_core::Severity;

use crate::domain::entities::ApiFinding;
use crate::domain::value_objects::{ApiVulnerabilityType, SpecDocument};

/// Analyzer for missing authentication
pub struct AuthenticationAnalyzer;

impl AuthenticationAnalyzer {
    pub fn analyze(doc: &SpecDocument) -> Vec<ApiFinding> {
        let mut findings = Vec::new();
        let root = doc.root();
        let global_security = root.get("security").is_truthy();

        // Swagger 2.0 declares schemes under securityDefinitions, OpenAPI 3 under components
        let has_schemes = global_security
            || root.get("securityDefinitions").is_truthy()
            || root.get("components").get("securitySchemes").is_truthy();

        if !has_schemes {
            findings.push(ApiFinding {
                severity: Severity::High,
                vulnerability_type: ApiVulnerabilityType::Authentication,
                description: "No global security schemes defined".to_string(),
                path: "root".to_string(),
                recommendation:
                    "Define security schemes (e.g., OAuth2, API Key) in components.securitySchemes"
                        .to_string(),
            });
        }

        for operation in doc.operations() {
            // An explicit empty list still counts as declared
            let has_security = operation.node.get("security").is_truthy() || global_security;

            if !has_security {
                findings.push(ApiFinding {
                    severity: Severity::High,
                    vulnerability_type: ApiVulnerabilityType::Authentication,
                    description: format!(
                        "Endpoint {} has no security requirements",
                        operation.display_name()
                    ),
                    path: operation.locator(),
                    recommendation: "Add security requirements to protect the endpoint"
                        .to_string(),
                });
            }
        }

        findings
    }
}
