//! LLM-backed text classifier.
//!
//! Shows the model the question, the respondent's answer and the option
//! list as `CODE: label` lines, and asks for the matching code(s) or the
//! literal `UNCLEAR`. Whatever comes back is filtered against the
//! question's own codes.
//!
//! Every failure mode (provider error, elapsed timeout, unusable reply)
//! ends up as `ClassificationOutcome::Unclear`.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::catalog::{Cardinality, OptionCode, Question};
use crate::domain::foundation::SessionId;
use crate::domain::survey::ClassificationOutcome;
use crate::ports::{
    AIProvider, CompletionPurpose, CompletionRequest, MessageRole, RequestMetadata,
    TextClassifier,
};

const SYSTEM_PROMPT: &str = "You are an assistant that analyses answers to a sociological survey. \
Your task is to match the respondent's answer precisely to the offered options.";

const UNCLEAR_TOKEN: &str = "UNCLEAR";
const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 50;

/// Classifier that delegates the matching to a language model.
pub struct LlmTextClassifier {
    provider: Arc<dyn AIProvider>,
    timeout: Duration,
}

impl LlmTextClassifier {
    /// `timeout` bounds one classification call, retries included.
    pub fn new(provider: Arc<dyn AIProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    fn build_prompt(utterance: &str, question: &Question) -> String {
        let options = question
            .options
            .iter()
            .map(|o| format!("{}: {}", o.code, o.label))
            .collect::<Vec<_>>()
            .join("\n");

        let task = match question.cardinality {
            Cardinality::Single => {
                "Task: decide which single option best matches the respondent's answer.\n\
                 Return ONLY the option code (for example: A1 or B2), with no other text."
            }
            Cardinality::Multi => {
                "Task: decide which options match the respondent's answer.\n\
                 Return the option codes separated by commas (for example: C1,C3 or C1,C2,C5), \
                 with no spaces and no other text."
            }
        };

        format!(
            "The respondent answered the question: \"{}\"\n\n\
             Their answer: \"{}\"\n\n\
             Available options:\n{}\n\n\
             {}\n\
             If the answer does not match any option, return \"{}\".",
            question.prompt, utterance, options, task, UNCLEAR_TOKEN
        )
    }

    /// Interprets a raw model reply for `question`.
    fn parse_reply(reply: &str, question: &Question) -> ClassificationOutcome {
        let reply = reply.trim().trim_matches('"').trim();
        if reply.is_empty() || reply == UNCLEAR_TOKEN {
            return ClassificationOutcome::Unclear;
        }

        let codes = reply
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(OptionCode::from)
            .collect();

        ClassificationOutcome::from_codes(codes).restrict_to(question)
    }
}

#[async_trait]
impl TextClassifier for LlmTextClassifier {
    async fn classify(
        &self,
        session_id: SessionId,
        utterance: &str,
        question: &Question,
    ) -> ClassificationOutcome {
        let request = CompletionRequest::new(
            RequestMetadata::new(
                CompletionPurpose::Classification,
                format!("classify-{}-{}", session_id, question.id),
            )
            .with_session(session_id),
        )
        .with_system_prompt(SYSTEM_PROMPT)
        .with_message(MessageRole::User, Self::build_prompt(utterance, question))
        .with_temperature(TEMPERATURE)
        .with_max_tokens(MAX_TOKENS);

        let reply = match tokio::time::timeout(self.timeout, self.provider.complete(request)).await
        {
            Ok(Ok(response)) => response.content,
            Ok(Err(err)) => {
                tracing::warn!(
                    session_id = %session_id,
                    question_id = %question.id,
                    error = %err,
                    "Classification failed, treating answer as unclear"
                );
                return ClassificationOutcome::Unclear;
            }
            Err(_) => {
                tracing::warn!(
                    session_id = %session_id,
                    question_id = %question.id,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Classification timed out, treating answer as unclear"
                );
                return ClassificationOutcome::Unclear;
            }
        };

        let outcome = Self::parse_reply(&reply, question);
        tracing::debug!(
            session_id = %session_id,
            question_id = %question.id,
            reply = %reply.trim(),
            unclear = outcome.is_unclear(),
            "Classified answer"
        );
        outcome
    }
}
