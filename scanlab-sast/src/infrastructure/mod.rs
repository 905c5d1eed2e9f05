//! Infrastructure layer for pattern scanning

pub mod probes;
pub mod secure_examples;

pub use probes::*;
pub use secure_examples::*;
