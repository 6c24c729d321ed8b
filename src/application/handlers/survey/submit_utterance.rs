//! SubmitUtteranceHandler - Command handler for one respondent answer.
//!
//! A turn runs in two phases while holding the session's lock:
//!
//! 1. **Consult** - classify the utterance and, if another question
//!    follows, compose the acknowledgement. Nothing is mutated yet, so a
//!    caller that goes away here leaves the session exactly as it was.
//! 2. **Commit** - apply the outcome and, on the last answer, finalize.
//!    This phase is spawned as its own task so it always runs to the end
//!    once started, even if the caller is dropped.

use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;

use crate::domain::foundation::SessionId;
use crate::domain::survey::{Advance, ClassificationOutcome, SurveyError, SurveySession, Turn};
use crate::ports::{AcknowledgementComposer, SessionRegistry, TextClassifier};

use super::ResultFinalizer;

/// Command carrying one respondent answer.
#[derive(Debug, Clone)]
pub struct SubmitUtteranceCommand {
    pub session_id: SessionId,
    pub utterance: String,
}

/// Handler for respondent answers.
pub struct SubmitUtteranceHandler {
    registry: Arc<dyn SessionRegistry>,
    classifier: Arc<dyn TextClassifier>,
    composer: Arc<dyn AcknowledgementComposer>,
    finalizer: Arc<ResultFinalizer>,
}

impl SubmitUtteranceHandler {
    pub fn new(
        registry: Arc<dyn SessionRegistry>,
        classifier: Arc<dyn TextClassifier>,
        composer: Arc<dyn AcknowledgementComposer>,
        finalizer: Arc<ResultFinalizer>,
    ) -> Self {
        Self {
            registry,
            classifier,
            composer,
            finalizer,
        }
    }

    /// # Errors
    ///
    /// - `NotFound` / `Expired` for an unknown or idle session
    /// - `AlreadyCompleted` once the last question has been answered
    /// - `InvalidAnswer` for a blank utterance on an active session
    pub async fn handle(&self, cmd: SubmitUtteranceCommand) -> Result<Turn, SurveyError> {
        let handle = self.registry.get(&cmd.session_id).await?;
        let session = handle.lock_owned().await;

        let question = session
            .current_question()
            .cloned()
            .ok_or_else(|| SurveyError::already_completed(cmd.session_id))?;

        let utterance = cmd.utterance.trim();
        if utterance.is_empty() {
            return Err(SurveyError::invalid_answer("answer cannot be empty"));
        }

        let outcome = self
            .classifier
            .classify(cmd.session_id, utterance, &question)
            .await
            .restrict_to(&question);

        if outcome.is_unclear() {
            tracing::debug!(
                session_id = %cmd.session_id,
                question_id = %question.id,
                "Answer did not match any option"
            );
            return Ok(Turn::reprompt(&session));
        }

        let acknowledgement = match session.catalog().get(session.cursor() + 1) {
            Some(next) => Some(
                self.composer
                    .acknowledge(cmd.session_id, utterance, &question, next)
                    .await,
            ),
            None => None,
        };

        let commit = tokio::spawn(commit_turn(
            session,
            outcome,
            cmd.utterance,
            acknowledgement,
            Arc::clone(&self.finalizer),
        ));

        commit
            .await
            .map_err(|err| SurveyError::internal(format!("turn commit failed: {}", err)))?
    }
}

async fn commit_turn(
    mut session: OwnedMutexGuard<SurveySession>,
    outcome: ClassificationOutcome,
    utterance: String,
    acknowledgement: Option<String>,
    finalizer: Arc<ResultFinalizer>,
) -> Result<Turn, SurveyError> {
    match session.apply(outcome, &utterance)? {
        // Unclear outcomes return before the commit phase is spawned.
        Advance::Unchanged => Err(SurveyError::internal(
            "unclear outcome reached the commit phase",
        )),
        Advance::NextQuestion => {
            tracing::debug!(
                session_id = %session.id(),
                cursor = session.cursor(),
                "Answer recorded"
            );
            Ok(Turn::next_question(
                &session,
                acknowledgement.as_deref().unwrap_or_default(),
            ))
        }
        Advance::Completed => {
            finalizer.finalize(&mut session).await?;
            tracing::info!(
                session_id = %session.id(),
                answers = session.answers().len(),
                "Survey completed"
            );
            Ok(Turn::completion(&session))
        }
    }
}
