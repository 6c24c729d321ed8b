//! HTTP handlers for administrative endpoints.
//!
//! Every endpoint requires `Authorization: Bearer <admin token>`. Without a
//! configured token the endpoints answer 403.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::adapters::http::error::{survey_error_response, ErrorResponse};
use crate::application::handlers::survey::ReloadCatalogHandler;

use super::dto::ReloadCatalogResponse;

#[derive(Clone)]
pub struct AdminHandlers {
    reload_handler: Arc<ReloadCatalogHandler>,
    token: Option<Arc<Secret<String>>>,
    verbose_errors: bool,
}

impl AdminHandlers {
    pub fn new(reload_handler: Arc<ReloadCatalogHandler>, token: Option<Secret<String>>) -> Self {
        Self {
            reload_handler,
            token: token.map(Arc::new),
            verbose_errors: false,
        }
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    /// Checks the bearer token, returning the rejection response on failure.
    fn authorize(&self, headers: &HeaderMap) -> Result<(), Response> {
        let expected = match &self.token {
            Some(token) => token,
            None => {
                return Err(ErrorResponse::forbidden("Admin endpoints are disabled")
                    .into_response_with(StatusCode::FORBIDDEN))
            }
        };

        let provided = headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "));

        match provided {
            Some(provided)
                if constant_time_compare(
                    provided.as_bytes(),
                    expected.expose_secret().as_bytes(),
                ) =>
            {
                Ok(())
            }
            _ => {
                tracing::warn!("Rejected admin request with missing or invalid token");
                Err(ErrorResponse::unauthorized("Invalid admin token")
                    .into_response_with(StatusCode::UNAUTHORIZED))
            }
        }
    }
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// POST /admin/catalog/reload - Re-read the question catalog
pub async fn reload_catalog(State(handlers): State<AdminHandlers>, headers: HeaderMap) -> Response {
    if let Err(rejection) = handlers.authorize(&headers) {
        return rejection;
    }

    match handlers.reload_handler.handle().await {
        Ok(result) => (StatusCode::OK, Json(ReloadCatalogResponse::from(result))).into_response(),
        Err(e) => survey_error_response(e, handlers.verbose_errors),
    }
}
