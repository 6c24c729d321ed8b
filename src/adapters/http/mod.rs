//! HTTP adapters - REST API implementations.
//!
//! - `survey` - conversation endpoints and the catalog listing
//! - `admin` - token-guarded operator endpoints
//!
//! [`api_router`] merges both and adds the cross-cutting layers
//! (request tracing, CORS, request timeout).

pub mod admin;
mod error;
pub mod survey;

pub use admin::{admin_routes, AdminHandlers};
pub use error::{status_for, survey_error_response, ErrorResponse};
pub use survey::{survey_routes, SurveyHandlers};

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Builds the full application router.
pub fn api_router(survey: SurveyHandlers, admin: AdminHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .merge(survey_routes(survey))
        .merge(admin_routes(admin))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy for the configured origins; `*` allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(allowed))
}
