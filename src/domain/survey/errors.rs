//! Survey-specific error types.

use thiserror::Error;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{ErrorCode, SessionId, ValidationError};

/// Errors surfaced by survey operations.
///
/// A classifier failure is never one of these; it degrades to an
/// unclear outcome before it reaches the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Session expired: {0}")]
    Expired(SessionId),

    #[error("Survey already completed for session {0}")]
    AlreadyCompleted(SessionId),

    #[error("Results already finalized for session {0}")]
    AlreadyFinalized(SessionId),

    #[error("Survey not completed for session {0}")]
    NotCompleted(SessionId),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SurveyError {
    pub fn not_found(id: SessionId) -> Self {
        SurveyError::NotFound(id)
    }

    pub fn expired(id: SessionId) -> Self {
        SurveyError::Expired(id)
    }

    pub fn already_completed(id: SessionId) -> Self {
        SurveyError::AlreadyCompleted(id)
    }

    pub fn invalid_answer(message: impl Into<String>) -> Self {
        SurveyError::InvalidAnswer(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SurveyError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        SurveyError::Internal(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SurveyError::NotFound(_) => ErrorCode::SessionNotFound,
            SurveyError::Expired(_) => ErrorCode::SessionExpired,
            SurveyError::AlreadyCompleted(_) => ErrorCode::SurveyAlreadyCompleted,
            SurveyError::AlreadyFinalized(_) => ErrorCode::AlreadyFinalized,
            SurveyError::NotCompleted(_) => ErrorCode::SurveyNotCompleted,
            SurveyError::InvalidAnswer(_) => ErrorCode::InvalidAnswer,
            SurveyError::Validation { .. } => ErrorCode::ValidationFailed,
            SurveyError::Catalog(err) => err.code(),
            SurveyError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for SurveyError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        SurveyError::Validation {
            field,
            message: err.to_string(),
        }
    }
}
