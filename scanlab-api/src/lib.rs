//! Scanlab API Security - OpenAPI/Swagger specification scanning
//!
//! The pipeline is `SpecLoader` → `SpecValidator` → `RefResolver` → `RuleEngine` → `RiskAggregator`.
//! A document that fails loading or validation never reaches the rule engine.
//!
//! ```rust,ignore
//! use scanlab_api::{AnalysisOutcome, analyze_specification};
//!
//! let outcome = AnalysisOutcome::from(analyze_specification(spec_text));
//! println!("{}", serde_json::to_string_pretty(&outcome)?);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::aggregator::{GENERAL_RECOMMENDATIONS, RiskAggregator, RiskSummary};
pub use application::use_cases::{ScanApiSpecificationUseCase, ScanError};
pub use domain::{
    AnalysisOutcome, AnalysisReport, ApiFinding, ApiVulnerabilityType, ParseFailure, RuleEngine,
    SpecDocument, SpecNode, SpecValidator,
};

/// Analyze specification text with the default validator and rule set
pub fn analyze_specification(content: &str) -> Result<AnalysisReport, ScanError> {
    ScanApiSpecificationUseCase::new().execute(content)
}
