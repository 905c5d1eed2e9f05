//! Ordered security rule battery

use scanlab_core::config::ApiSecurityConfig;
use tracing::debug;

use crate::domain::entities::ApiFinding;
use crate::domain::traits::RuleEngine;
use crate::domain::value_objects::SpecDocument;
use crate::infrastructure::analyzers::*;

type AnalyzerFn = fn(&SpecDocument) -> Vec<ApiFinding>;

const ANALYZERS: [(&str, AnalyzerFn); 4] = [
    ("authentication", AuthenticationAnalyzer::analyze),
    ("data_exposure", DataExposureAnalyzer::analyze),
    ("rate_limiting", RateLimitingAnalyzer::analyze),
    ("input_validation", InputValidationAnalyzer::analyze),
];

/// Default [`RuleEngine`]: runs the analyzers in fixed order and concatenates
/// their findings
pub struct SecurityRuleEngine {
    analyzers: Vec<(&'static str, AnalyzerFn)>,
}

impl SecurityRuleEngine {
    pub fn new() -> Self {
        Self {
            analyzers: ANALYZERS.to_vec(),
        }
    }

    /// Restrict to `enabled_analyzers` (empty = all); order is unaffected
    pub fn with_config(config: &ApiSecurityConfig) -> Self {
        if config.enabled_analyzers.is_empty() {
            return Self::new();
        }

        let analyzers = ANALYZERS
            .iter()
            .filter(|(name, _)| {
                config.enabled_analyzers.iter().any(|enabled| {
                    enabled.eq_ignore_ascii_case(name)
                        || enabled.eq_ignore_ascii_case(&format!("{}_analyzer", name))
                })
            })
            .copied()
            .collect();

        Self { analyzers }
    }

    pub fn analyzer_names(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|(name, _)| *name).collect()
    }
}

impl Default for SecurityRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine for SecurityRuleEngine {
    fn run_rules(&self, doc: &SpecDocument) -> Vec<ApiFinding> {
        debug!(
            total_analyzers = ANALYZERS.len(),
            enabled_analyzers = self.analyzers.len(),
            "Running analyzers"
        );

        let mut all_findings = Vec::new();
        for (analyzer_name, analyzer_func) in &self.analyzers {
            let findings = analyzer_func(doc);
            debug!(
                analyzer = *analyzer_name,
                finding_count = findings.len(),
                "Analyzer finished"
            );
            all_findings.extend(findings);
        }
        all_findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ApiVulnerabilityType;
    use serde_json::json;

    #[test]
    fn test_default_order() {
        assert_eq!(
            SecurityRuleEngine::new().analyzer_names(),
            vec![
                "authentication",
                "data_exposure",
                "rate_limiting",
                "input_validation"
            ]
        );
    }

    #[test]
    fn test_enabled_analyzers_filter_keeps_order() {
        let config = ApiSecurityConfig {
            enabled_analyzers: vec![
                "INPUT_VALIDATION".to_string(),
                "authentication_analyzer".to_string(),
            ],
            ..Default::default()
        };

        let engine = SecurityRuleEngine::with_config(&config);
        assert_eq!(
            engine.analyzer_names(),
            vec!["authentication", "input_validation"]
        );
    }

    #[test]
    fn test_empty_document_yields_root_findings_only() {
        let findings = SecurityRuleEngine::new().run_rules(&SpecDocument::new(json!({})));

        let types: Vec<ApiVulnerabilityType> =
            findings.iter().map(|f| f.vulnerability_type).collect();
        assert_eq!(
            types,
            vec![
                ApiVulnerabilityType::Authentication,
                ApiVulnerabilityType::RateLimiting
            ]
        );
        assert!(findings.iter().all(|f| f.path == "root"));
    }
}
