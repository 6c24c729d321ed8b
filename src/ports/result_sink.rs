//! Result Sink Port - storage for finalized survey results.

use async_trait::async_trait;
use std::fmt;

use crate::domain::survey::SurveyResult;

/// Errors that can occur while storing results.
#[derive(Debug, thiserror::Error)]
pub enum ResultSinkError {
    #[error("Failed to serialize result: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Result sink unavailable: {0}")]
    Unavailable(String),
}

/// Opaque location of a stored result (a file path, a key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLocation(String);

impl ResultLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResultLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Port for persisting completed survey results.
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Store one finalized result.
    ///
    /// # Errors
    /// Returns `ResultSinkError` if the result could not be stored.
    async fn store(&self, result: &SurveyResult) -> Result<ResultLocation, ResultSinkError>;
}
