//! Domain layer for text-generation providers

pub mod error;
pub mod messages;
pub mod provider;
pub mod report;

pub use error::LlmError;
pub use messages::*;
pub use provider::*;
pub use report::*;
