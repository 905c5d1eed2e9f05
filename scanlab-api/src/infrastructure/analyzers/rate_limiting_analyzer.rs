//! Rate limiting analyzer

use scanlab_core::Severity;

use crate::domain::entities::ApiFinding;
use crate::domain::value_objects::{ApiVulnerabilityType, SpecDocument};

/// Analyzer for missing rate limiting declarations
pub struct RateLimitingAnalyzer;

impl RateLimitingAnalyzer {
    pub fn analyze(doc: &SpecDocument) -> Vec<ApiFinding> {
        let components = doc.root().get("components");
        let has_rate_limiting = components
            .get("headers")
            .get("X-RateLimit-Limit")
            .is_truthy()
            || components
                .get("parameters")
                .get("rate-limit")
                .is_truthy()
            || doc
                .to_compact_string()
                .to_lowercase()
                .contains("ratelimit");

        if has_rate_limiting {
            return Vec::new();
        }

        vec![ApiFinding {
            severity: Severity::Medium,
            vulnerability_type: ApiVulnerabilityType::RateLimiting,
            description: "No rate limiting mechanisms detected".to_string(),
            path: "root".to_string(),
            recommendation:
                "Implement rate limiting using headers (X-RateLimit-*) or other mechanisms"
                    .to_string(),
        }]
    }
}
