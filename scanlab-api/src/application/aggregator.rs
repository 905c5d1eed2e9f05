//! Reduction of findings to an overall risk

use scanlab_core::Severity;

use crate::domain::entities::ApiFinding;

/// General recommendations attached to every successful report
pub const GENERAL_RECOMMENDATIONS: [&str; 7] = [
    "Always use HTTPS for API endpoints",
    "Implement proper authentication and authorization",
    "Use rate limiting to prevent abuse",
    "Validate all input parameters",
    "Implement proper error handling",
    "Use appropriate HTTP methods",
    "Version your API endpoints",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskSummary {
    pub overall_risk: Severity,
    pub recommendations: Vec<String>,
}

pub struct RiskAggregator;

impl RiskAggregator {
    /// Worst severity among `findings`, `Low` when there are none
    pub fn aggregate(findings: &[ApiFinding]) -> RiskSummary {
        let overall_risk =
            Severity::worst(findings.iter().map(|f| f.severity)).unwrap_or(Severity::Low);

        RiskSummary {
            overall_risk,
            recommendations: GENERAL_RECOMMENDATIONS
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}
