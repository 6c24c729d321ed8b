//! Text Classifier Port - maps a free-text answer onto a question's options.

use async_trait::async_trait;

use crate::domain::catalog::Question;
use crate::domain::foundation::SessionId;
use crate::domain::survey::ClassificationOutcome;

/// Port for free-text classification.
///
/// Implementations never fail: transport errors, timeouts and malformed
/// backend replies all come back as `ClassificationOutcome::Unclear`.
/// Returned codes should belong to `question`, but callers re-check.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    async fn classify(
        &self,
        session_id: SessionId,
        utterance: &str,
        question: &Question,
    ) -> ClassificationOutcome;
}
