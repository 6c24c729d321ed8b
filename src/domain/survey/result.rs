//! Finalized survey results.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};

use super::AnswerRecord;

/// Package handed to a result sink when a session completes.
///
/// The serde form is the stored result layout:
/// `{ "session_id", "timestamp", "answers" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResult {
    pub session_id: SessionId,
    #[serde(rename = "timestamp")]
    pub completed_at: Timestamp,
    pub answers: Vec<AnswerRecord>,
}

impl SurveyResult {
    pub fn new(session_id: SessionId, completed_at: Timestamp, answers: Vec<AnswerRecord>) -> Self {
        Self {
            session_id,
            completed_at,
            answers,
        }
    }
}

/// What happened when a completed session was handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finalization {
    /// Results were stored; `location` is sink-specific (a file path, a key).
    Stored { location: String },
    /// The sink rejected the results. The answers are still in the session.
    Failed { reason: String },
}

impl Finalization {
    pub fn is_stored(&self) -> bool {
        matches!(self, Finalization::Stored { .. })
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Finalization::Stored { location } => Some(location),
            Finalization::Failed { .. } => None,
        }
    }
}
