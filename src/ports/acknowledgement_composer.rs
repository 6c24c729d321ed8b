//! Acknowledgement Composer Port - short reply to an accepted answer.

use async_trait::async_trait;

use crate::domain::catalog::Question;
use crate::domain::foundation::SessionId;

/// Port for composing the acknowledgement placed before the next question.
///
/// Always yields some text; implementations fall back to a fixed phrase.
#[async_trait]
pub trait AcknowledgementComposer: Send + Sync {
    async fn acknowledge(
        &self,
        session_id: SessionId,
        utterance: &str,
        answered: &Question,
        next: &Question,
    ) -> String;
}
