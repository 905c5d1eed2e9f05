//! Infrastructure layer for text-generation providers

pub mod prompts;
pub mod providers;
pub mod registry;
