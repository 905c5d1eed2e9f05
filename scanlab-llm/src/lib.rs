//! Scanlab LLM - AI assisted code review
//!
//! Talks to an OpenAI-compatible chat-completions endpoint. The review report
//! is a fixed demonstration report; the model output is only checked for
//! presence, never interpreted.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::ReviewCodeUseCase;
pub use domain::*;
pub use infrastructure::prompts;
pub use infrastructure::providers::OpenAIProvider;
pub use infrastructure::registry::provider_from_config;
