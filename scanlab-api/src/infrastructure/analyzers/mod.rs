//! API security analyzers

pub mod authentication_analyzer;
pub mod data_exposure_analyzer;
pub mod input_validation_analyzer;
pub mod rate_limiting_analyzer;

pub use authentication_analyzer::*;
pub use data_exposure_analyzer::*;
pub use input_validation_analyzer::*;
pub use rate_limiting_analyzer::*;
