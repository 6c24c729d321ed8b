//! LLM-backed acknowledgement composer.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::catalog::Question;
use crate::domain::foundation::SessionId;
use crate::domain::survey::messages::FALLBACK_ACKNOWLEDGEMENT;
use crate::ports::{
    AIProvider, AcknowledgementComposer, CompletionPurpose, CompletionRequest, MessageRole,
    RequestMetadata,
};

const SYSTEM_PROMPT: &str =
    "You are a friendly assistant conducting a survey. Keep replies short and warm.";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 150;

/// Asks a language model for a one or two sentence acknowledgement.
///
/// Falls back to a fixed phrase on provider errors, timeouts and empty replies.
pub struct LlmAcknowledgementComposer {
    provider: Arc<dyn AIProvider>,
    timeout: Duration,
}

impl LlmAcknowledgementComposer {
    pub fn new(provider: Arc<dyn AIProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    fn build_prompt(utterance: &str, answered: &Question, next: &Question) -> String {
        let next_options = next
            .labels()
            .map(|label| format!("- {}", label))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "The respondent was asked: \"{}\"\n\
             They just answered: \"{}\"\n\n\
             The next question will be: \"{}\"\n\
             Its options:\n{}\n\n\
             Thank the respondent briefly and naturally for their answer. \
             Do not repeat the next question. Reply in one or two sentences at most.",
            answered.prompt, utterance, next.prompt, next_options
        )
    }
}

#[async_trait]
impl AcknowledgementComposer for LlmAcknowledgementComposer {
    async fn acknowledge(
        &self,
        session_id: SessionId,
        utterance: &str,
        answered: &Question,
        next: &Question,
    ) -> String {
        let request = CompletionRequest::new(
            RequestMetadata::new(
                CompletionPurpose::Acknowledgement,
                format!("ack-{}-{}", session_id, answered.id),
            )
            .with_session(session_id),
        )
        .with_system_prompt(SYSTEM_PROMPT)
        .with_message(
            MessageRole::User,
            Self::build_prompt(utterance, answered, next),
        )
        .with_temperature(TEMPERATURE)
        .with_max_tokens(MAX_TOKENS);

        match tokio::time::timeout(self.timeout, self.provider.complete(request)).await {
            Ok(Ok(response)) if !response.content.trim().is_empty() => {
                response.content.trim().to_string()
            }
            Ok(Ok(_)) => FALLBACK_ACKNOWLEDGEMENT.to_string(),
            Ok(Err(err)) => {
                tracing::warn!(
                    session_id = %session_id,
                    error = %err,
                    "Acknowledgement generation failed, using fallback"
                );
                FALLBACK_ACKNOWLEDGEMENT.to_string()
            }
            Err(_) => {
                tracing::warn!(
                    session_id = %session_id,
                    "Acknowledgement generation timed out, using fallback"
                );
                FALLBACK_ACKNOWLEDGEMENT.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::catalog::{AnswerOption, Cardinality};

    fn questions() -> (Question, Question) {
        (
            Question::new(
                1,
                "Do you own a car?",
                Cardinality::Single,
                vec![AnswerOption::new("A1", "yes"), AnswerOption::new("A2", "no")],
            ),
            Question::new(
                2,
                "Which transport do you use?",
                Cardinality::Multi,
                vec![AnswerOption::new("B1", "bus"), AnswerOption::new("B2", "bike")],
            ),
        )
    }

    #[tokio::test]
    async fn returns_trimmed_model_reply() {
        let provider = MockAIProvider::new().with_response("  Thanks, noted!  ");
        let composer = LlmAcknowledgementComposer::new(Arc::new(provider.clone()), Duration::from_secs(5));
        let (answered, next) = questions();

        let ack = composer
            .acknowledge(SessionId::new(), "yeah sure", &answered, &next)
            .await;

        assert_eq!(ack, "Thanks, noted!");
        let call = &provider.get_calls()[0];
        assert_eq!(call.temperature, Some(TEMPERATURE));
        assert_eq!(call.max_tokens, Some(MAX_TOKENS));
        assert!(call.messages[0].content.contains("\"yeah sure\""));
        assert!(call.messages[0].content.contains("- bus\n- bike"));
    }

    #[tokio::test]
    async fn provider_error_falls_back() {
        let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
        let composer = LlmAcknowledgementComposer::new(Arc::new(provider), Duration::from_secs(5));
        let (answered, next) = questions();

        let ack = composer
            .acknowledge(SessionId::new(), "no", &answered, &next)
            .await;

        assert_eq!(ack, FALLBACK_ACKNOWLEDGEMENT);
    }

    #[tokio::test]
    async fn empty_reply_falls_back() {
        let provider = MockAIProvider::new().with_response("   ");
        let composer = LlmAcknowledgementComposer::new(Arc::new(provider), Duration::from_secs(5));
        let (answered, next) = questions();

        let ack = composer
            .acknowledge(SessionId::new(), "no", &answered, &next)
            .await;

        assert_eq!(ack, FALLBACK_ACKNOWLEDGEMENT);
    }
}
