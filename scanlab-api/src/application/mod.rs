//! Application layer for API security

pub mod aggregator;
pub mod use_cases;

pub use aggregator::*;
pub use use_cases::*;
