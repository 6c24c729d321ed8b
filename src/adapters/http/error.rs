//! Error responses shared by the HTTP adapters.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;
use crate::domain::survey::SurveyError;

/// Standard error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new("FORBIDDEN", message)
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// HTTP status for a survey error.
pub fn status_for(error: &SurveyError) -> StatusCode {
    match error.code() {
        ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::SessionExpired => StatusCode::GONE,
        ErrorCode::SurveyAlreadyCompleted
        | ErrorCode::AlreadyFinalized
        | ErrorCode::SurveyNotCompleted => StatusCode::CONFLICT,
        ErrorCode::ValidationFailed | ErrorCode::InvalidAnswer => StatusCode::BAD_REQUEST,
        ErrorCode::CatalogInvalid => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::CatalogUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps a survey error to a JSON error response.
///
/// Internal error details are only exposed when `verbose` is set.
pub fn survey_error_response(error: SurveyError, verbose: bool) -> Response {
    let status = status_for(&error);
    let message = match &error {
        SurveyError::Internal(_) if !verbose => "Internal server error".to_string(),
        _ => error.to_string(),
    };

    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    }

    ErrorResponse::new(error.code().to_string(), message).into_response_with(status)
}
