use std::time::Duration;

use axum::http::header::InvalidHeaderValue;
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers::{
    get_profile_handler, health_handler, method_not_allowed_handler, put_profile_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .nest(
                "/api",
                Router::new()
                    .route("/health", get(health_handler))
                    .route(
                        "/users/me",
                        get(get_profile_handler)
                            .put(put_profile_handler)
                            .fallback(method_not_allowed_handler),
                    ),
            )
            .with_state(state)
    }
}

/// Cross-origin policy for the browser frontend. One allowed origin,
/// credentialed requests, 1h preflight cache.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}
