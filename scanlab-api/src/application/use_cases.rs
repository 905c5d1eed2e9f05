//! API security use cases

use std::sync::Arc;

use scanlab_core::config::ApiSecurityConfig;
use tracing::{debug, info, instrument, warn};

use crate::application::aggregator::RiskAggregator;
use crate::domain::entities::{AnalysisReport, ParseFailure};
use crate::domain::traits::{RuleEngine, SpecValidator, ValidationFailure};
use crate::infrastructure::parser::{LoadError, RefResolver, SpecLoader, StructuralValidator};
use crate::infrastructure::rule_engine::SecurityRuleEngine;

/// Use case for scanning an API specification
pub struct ScanApiSpecificationUseCase {
    validator: Arc<dyn SpecValidator>,
    rule_engine: Arc<dyn RuleEngine>,
    exclude_paths: Vec<String>,
}

impl ScanApiSpecificationUseCase {
    pub fn new() -> Self {
        Self::with_config(&ApiSecurityConfig::default())
    }

    pub fn with_config(config: &ApiSecurityConfig) -> Self {
        Self {
            validator: Arc::new(StructuralValidator::new()),
            rule_engine: Arc::new(SecurityRuleEngine::with_config(config)),
            exclude_paths: config.exclude_paths.clone(),
        }
    }

    /// Build with custom collaborators
    pub fn with_components(
        validator: Arc<dyn SpecValidator>,
        rule_engine: Arc<dyn RuleEngine>,
    ) -> Self {
        Self {
            validator,
            rule_engine,
            exclude_paths: Vec::new(),
        }
    }

    #[instrument(skip_all, fields(content_len = content.len()))]
    pub fn execute(&self, content: &str) -> Result<AnalysisReport, ScanError> {
        info!("Starting API security scan");

        let doc = SpecLoader::load(content)?;

        self.validator
            .validate(&doc)
            .inspect_err(|e| warn!(error = %e, "Specification failed validation"))?;

        // Rules see referenced parameters, bodies and schemas in place
        let resolved = RefResolver::dereference(&doc);
        let mut issues = self.rule_engine.run_rules(&resolved);

        if !self.exclude_paths.is_empty() {
            let initial_count = issues.len();
            issues.retain(|finding| {
                !self.exclude_paths.iter().any(|excluded| {
                    (excluded == "*" && finding.path != "root") || finding.path.starts_with(excluded)
                })
            });
            debug!(
                excluded_count = initial_count - issues.len(),
                "Applied path exclusions"
            );
        }

        let summary = RiskAggregator::aggregate(&issues);

        info!(
            finding_count = issues.len(),
            overall_risk = %summary.overall_risk,
            "API security scan completed"
        );

        Ok(AnalysisReport {
            valid: true,
            overall_risk: summary.overall_risk,
            issues,
            recommendations: summary.recommendations,
        })
    }
}

impl Default for ScanApiSpecificationUseCase {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan error; the message is what callers show as `error`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

impl From<&ScanError> for ParseFailure {
    fn from(error: &ScanError) -> Self {
        ParseFailure::new(error.to_string())
    }
}

impl From<ScanError> for ParseFailure {
    fn from(error: ScanError) -> Self {
        ParseFailure::from(&error)
    }
}
