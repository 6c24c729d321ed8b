//! HTTP routes for administrative endpoints.

use axum::{routing::post, Router};

use super::handlers::{reload_catalog, AdminHandlers};

/// Creates the admin router.
pub fn admin_routes(handlers: AdminHandlers) -> Router {
    Router::new()
        .route("/admin/catalog/reload", post(reload_catalog))
        .with_state(handlers)
}
