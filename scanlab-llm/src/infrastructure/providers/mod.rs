//! Provider implementations

pub mod openai;

pub use crate::domain::LlmProvider;
pub use openai::OpenAIProvider;
