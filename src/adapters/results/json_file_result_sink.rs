//! File-based Result Sink Adapter
//!
//! Writes each finalized session to
//! `<results_dir>/survey_<session_id>_<YYYYmmdd_HHMMSS>.json`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::survey::SurveyResult;
use crate::ports::{ResultLocation, ResultSink, ResultSinkError};

/// File-based storage for survey results
#[derive(Debug, Clone)]
pub struct JsonFileResultSink {
    base_path: PathBuf,
}

impl JsonFileResultSink {
    /// Create a sink writing into `base_path`; the directory is created on demand.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn file_path(&self, result: &SurveyResult) -> PathBuf {
        self.base_path.join(format!(
            "survey_{}_{}.json",
            result.session_id,
            result.completed_at.file_stamp()
        ))
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), ResultSinkError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| ResultSinkError::IoError(e.to_string()))
    }
}

#[async_trait]
impl ResultSink for JsonFileResultSink {
    async fn store(&self, result: &SurveyResult) -> Result<ResultLocation, ResultSinkError> {
        self.ensure_dir(&self.base_path).await?;

        let json = serde_json::to_string_pretty(result)
            .map_err(|e| ResultSinkError::SerializationFailed(e.to_string()))?;

        let file_path = self.file_path(result);
        fs::write(&file_path, json)
            .await
            .map_err(|e| ResultSinkError::IoError(e.to_string()))?;

        Ok(ResultLocation::new(file_path.to_string_lossy()))
    }
}
