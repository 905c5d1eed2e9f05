//! Scanlab - HTTP surface for the code and API specification scanners
//!
//! This is the root crate that wires the scanner crates behind one axum router

mod app;
pub mod presentation;

pub use app::create_app;
pub use presentation::AppState;
pub use scanlab_core::{Config, init_tracing};

// Re-export for convenience
pub use scanlab_api;
pub use scanlab_core;
pub use scanlab_llm;
pub use scanlab_sast;
