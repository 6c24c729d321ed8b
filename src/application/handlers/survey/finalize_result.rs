//! ResultFinalizer - hands a completed session's answers to the result sink.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::survey::{Finalization, SurveyError, SurveySession};
use crate::ports::ResultSink;

/// Packages completed sessions for the result sink, once per session.
pub struct ResultFinalizer {
    sink: Arc<dyn ResultSink>,
}

impl ResultFinalizer {
    pub fn new(sink: Arc<dyn ResultSink>) -> Self {
        Self { sink }
    }

    /// Stores the session's answers and records the outcome on the session.
    ///
    /// A sink failure is not an error here: it comes back as
    /// `Finalization::Failed` so the caller can still report completion.
    ///
    /// # Errors
    ///
    /// - `NotCompleted` if the session is still active
    /// - `AlreadyFinalized` if the session was finalized before
    pub async fn finalize(&self, session: &mut SurveySession) -> Result<Finalization, SurveyError> {
        let result = session.to_result(Timestamp::now())?;

        let finalization = match self.sink.store(&result).await {
            Ok(location) => {
                tracing::info!(
                    session_id = %result.session_id,
                    answers = result.answers.len(),
                    location = %location,
                    "Survey results stored"
                );
                Finalization::Stored {
                    location: location.into_string(),
                }
            }
            Err(err) => {
                tracing::error!(
                    session_id = %result.session_id,
                    answers = result.answers.len(),
                    error = %err,
                    "Failed to store survey results"
                );
                Finalization::Failed {
                    reason: err.to_string(),
                }
            }
        };

        session.mark_finalized(finalization.clone())?;
        Ok(finalization)
    }
}
