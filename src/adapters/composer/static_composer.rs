//! Fixed-phrase acknowledgement composer.

use async_trait::async_trait;

use crate::domain::catalog::Question;
use crate::domain::foundation::SessionId;
use crate::domain::survey::messages::FALLBACK_ACKNOWLEDGEMENT;
use crate::ports::AcknowledgementComposer;

/// Always acknowledges with the same phrase.
#[derive(Debug, Clone)]
pub struct StaticAcknowledgementComposer {
    phrase: String,
}

impl StaticAcknowledgementComposer {
    pub fn new() -> Self {
        Self::with_phrase(FALLBACK_ACKNOWLEDGEMENT)
    }

    pub fn with_phrase(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
        }
    }
}

impl Default for StaticAcknowledgementComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AcknowledgementComposer for StaticAcknowledgementComposer {
    async fn acknowledge(
        &self,
        _session_id: SessionId,
        _utterance: &str,
        _answered: &Question,
        _next: &Question,
    ) -> String {
        self.phrase.clone()
    }
}
