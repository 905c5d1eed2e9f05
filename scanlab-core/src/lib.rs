//! Scanlab Core - Foundation crate for the scanlab scanners
//!
//! This crate provides functionality shared by every scanner crate:
//!
//! # Modules
//!
//! - [`config`] - Strongly-typed configuration with TOML and environment variable support
//! - [`domain`] - Domain types shared across pipelines (finding severity)
//! - [`logging`] - Structured logging with tracing
//!
//! # Configuration
//!
//! Load configuration from files and environment:
//!
//! ```rust,ignore
//! use scanlab_core::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `SCANLAB__` prefix with double underscore separators:
//!
//! ```bash
//! SCANLAB__SERVER__PORT=3000
//! SCANLAB__LLM__API_KEY=sk-...
//! ```
//!
//! # Logging
//!
//! ```rust,ignore
//! use scanlab_core::init_tracing;
//!
//! init_tracing(&config.logging)?;
//! ```

pub mod config;
pub mod domain;
pub mod logging;

pub use config::Config;
pub use domain::Severity;
pub use logging::init_tracing;
