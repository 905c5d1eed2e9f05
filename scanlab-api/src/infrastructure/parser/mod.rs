//! OpenAPI/Swagger loading, structural validation and dereferencing

pub mod ref_resolver;
pub mod spec_loader;
pub mod spec_validator;

pub use ref_resolver::*;
pub use spec_loader::*;
pub use spec_validator::*;
