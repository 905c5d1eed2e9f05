//! Presentation layer - HTTP controllers, DTOs and routes

pub mod controllers;
pub mod models;
pub mod routes;

pub use controllers::AppState;
pub use routes::create_router;
