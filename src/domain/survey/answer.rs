//! Answer log entries.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{OptionCode, Question, QuestionId};

/// One accepted answer, appended to a session's log.
///
/// Serialized with the keys used by the stored result files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: QuestionId,

    /// Prompt text as it read when the answer was given.
    #[serde(rename = "question")]
    pub question_prompt: String,

    #[serde(rename = "answer_codes")]
    pub matched_codes: Vec<OptionCode>,

    #[serde(rename = "original_answer")]
    pub raw_utterance: String,
}

impl AnswerRecord {
    pub fn new(question: &Question, matched_codes: Vec<OptionCode>, raw_utterance: &str) -> Self {
        Self {
            question_id: question.id.clone(),
            question_prompt: question.prompt.clone(),
            matched_codes,
            raw_utterance: raw_utterance.to_string(),
        }
    }
}
