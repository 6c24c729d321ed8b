//! Catalog error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

use super::{OptionCode, QuestionId};

/// Errors raised while loading or validating a question catalog.
///
/// At startup any of these is fatal; on reload the previous catalog stays
/// active and the error goes back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("failed to read catalog from {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed catalog: {0}")]
    Parse(String),

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("catalog contains no questions")]
    Empty,

    #[error("duplicate question id: {0}")]
    DuplicateQuestionId(QuestionId),

    #[error("question {question_id} has no options")]
    NoOptions { question_id: QuestionId },

    #[error("question {question_id} has an empty prompt")]
    EmptyPrompt { question_id: QuestionId },

    #[error("question {question_id} has an empty option code")]
    EmptyOptionCode { question_id: QuestionId },

    #[error("question {question_id} repeats option code {code}")]
    DuplicateOptionCode {
        question_id: QuestionId,
        code: OptionCode,
    },
}

impl CatalogError {
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        CatalogError::Parse(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::Io { .. } => ErrorCode::CatalogUnavailable,
            _ => ErrorCode::CatalogInvalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_option_code_names_question_and_code() {
        let err = CatalogError::DuplicateOptionCode {
            question_id: QuestionId::Number(3),
            code: OptionCode::from("B1"),
        };
        assert_eq!(err.to_string(), "question 3 repeats option code B1");
        assert_eq!(err.code(), ErrorCode::CatalogInvalid);
    }

    #[test]
    fn io_errors_are_unavailable() {
        let err = CatalogError::io("survey_questions.json", "No such file");
        assert_eq!(err.code(), ErrorCode::CatalogUnavailable);
        assert!(err.to_string().contains("survey_questions.json"));
    }
}
