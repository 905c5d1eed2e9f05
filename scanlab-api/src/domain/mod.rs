//! Domain layer for API security

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{AnalysisOutcome, AnalysisReport, ApiFinding, ParseFailure};
pub use traits::{RuleEngine, SpecValidator, ValidationFailure};
pub use value_objects::*;
