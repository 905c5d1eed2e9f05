//! Application layer for pattern scanning

pub mod use_cases;

pub use use_cases::*;
