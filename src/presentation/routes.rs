//! API routes

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    response::IntoResponse,
    routing::{get, post},
};
use scanlab_core::Config;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::presentation::controllers::{
    AppState,
    analysis::{analyze_code, analyze_openapi},
    health::health_check,
    review::review_code,
};

/// Create the application router
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    let api_routes = Router::new()
        .route("/analyze/code", post(analyze_code))
        .route("/analyze/openapi", post(analyze_openapi))
        .route("/analyze/gpt", post(review_code));

    let health_routes = Router::new().route("/health", get(health_check));

    let router = Router::new()
        .nest("/api/v1", api_routes)
        .merge(health_routes)
        .with_state(app_state);

    let service_builder = ServiceBuilder::new()
        // HTTP tracing
        .layer(TraceLayer::new_for_http())
        // CORS handling
        .layer(cors_layer(config))
        // Request timeout
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_seconds,
        )))
        // Body size is enforced here instead of by the extractor default
        .layer(DefaultBodyLimit::disable())
        .map_response(IntoResponse::into_response)
        .layer(RequestBodyLimitLayer::new(config.server.max_body_bytes));

    router.layer(service_builder)
}

/// Empty or `["*"]` mirrors any origin; otherwise only the listed origins
fn cors_layer(config: &Config) -> CorsLayer {
    let origins = &config.server.allowed_origins;

    let layer = if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        CorsLayer::new().allow_origin(AllowOrigin::mirror_request())
    } else {
        let mut allowed = Vec::with_capacity(origins.len());
        for origin in origins {
            match HeaderValue::from_str(origin) {
                Ok(origin_header) => allowed.push(origin_header),
                Err(_) => {
                    tracing::warn!(origin, "Invalid CORS origin in config; skipping");
                }
            }
        }
        CorsLayer::new().allow_origin(allowed)
    };

    layer
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
        ])
        .allow_credentials(false)
        .max_age(Duration::from_secs(3600))
}
