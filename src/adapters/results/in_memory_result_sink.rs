//! In-Memory Result Sink Adapter
//!
//! Keeps finalized results in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::survey::SurveyResult;
use crate::ports::{ResultLocation, ResultSink, ResultSinkError};

/// In-memory storage for survey results
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultSink {
    results: Arc<RwLock<Vec<SurveyResult>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `store` fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// All stored results, in storage order.
    pub async fn results(&self) -> Vec<SurveyResult> {
        self.results.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.results.read().await.len()
    }
}

#[async_trait]
impl ResultSink for InMemoryResultSink {
    async fn store(&self, result: &SurveyResult) -> Result<ResultLocation, ResultSinkError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ResultSinkError::Unavailable(
                "in-memory sink set to fail".to_string(),
            ));
        }

        let mut results = self.results.write().await;
        results.push(result.clone());
        Ok(ResultLocation::new(format!(
            "memory://{}/{}",
            result.session_id,
            results.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SessionId, Timestamp};

    #[tokio::test]
    async fn stores_and_lists_results() {
        let sink = InMemoryResultSink::new();
        let result = SurveyResult::new(SessionId::new(), Timestamp::now(), vec![]);

        let location = sink.store(&result).await.unwrap();

        assert!(location.as_str().starts_with("memory://"));
        assert_eq!(sink.count().await, 1);
        assert_eq!(sink.results().await[0].session_id, result.session_id);
    }

    #[tokio::test]
    async fn failing_sink_rejects_and_keeps_nothing() {
        let sink = InMemoryResultSink::new();
        sink.set_failing(true);

        let result = SurveyResult::new(SessionId::new(), Timestamp::now(), vec![]);
        assert!(sink.store(&result).await.is_err());
        assert_eq!(sink.count().await, 0);

        sink.set_failing(false);
        assert!(sink.store(&result).await.is_ok());
    }
}
