//! Domain layer for pattern scanning

pub mod entities;
pub mod value_objects;

pub use entities::{CodeAnalysisReport, CodeFinding};
pub use value_objects::{CodeRisk, CodeVulnerabilityType};
