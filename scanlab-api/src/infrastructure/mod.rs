//! Infrastructure layer for API security

pub mod analyzers;
pub mod parser;
pub mod rule_engine;

pub use analyzers::*;
pub use parser::*;
pub use rule_engine::*;
