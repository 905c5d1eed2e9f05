//! Seams between the pipeline stages

use super::entities::ApiFinding;
use super::value_objects::SpecDocument;

/// Structural validation of a parsed document.
///
/// Implementations only decide pass/fail and explain failures; the security
/// rules never run on a document that fails here.
pub trait SpecValidator: Send + Sync {
    fn validate(&self, doc: &SpecDocument) -> Result<(), ValidationFailure>;
}

/// Ordered battery of security rules
pub trait RuleEngine: Send + Sync {
    fn run_rules(&self, doc: &SpecDocument) -> Vec<ApiFinding>;
}

/// Diagnostic produced when a document is not a valid API description
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub message: String,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
