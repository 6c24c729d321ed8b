//! HTTP DTOs for the survey conversation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Cardinality, Question, QuestionId};
use crate::domain::survey::Turn;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One respondent message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessageRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Liveness response for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

/// A catalog question, in the catalog file's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: QuestionId,
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: Cardinality,
    pub options: Vec<OptionResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionResponse {
    pub code: String,
    pub text: String,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            question: question.prompt.clone(),
            question_type: question.cardinality,
            options: question
                .options
                .iter()
                .map(|o| OptionResponse {
                    code: o.code.to_string(),
                    text: o.label.clone(),
                })
                .collect(),
        }
    }
}

/// One system reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnResponse {
    pub session_id: String,
    pub message: String,
    pub current_question: Option<QuestionResponse>,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_saved: Option<bool>,
}

impl From<Turn> for TurnResponse {
    fn from(turn: Turn) -> Self {
        Self {
            session_id: turn.session_id.to_string(),
            message: turn.message,
            current_question: turn.current_question.as_ref().map(QuestionResponse::from),
            is_completed: turn.completed,
            results_saved: turn.results_saved,
        }
    }
}
