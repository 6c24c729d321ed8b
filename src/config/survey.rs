//! Survey runtime configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Catalog location, result storage and session lifetime settings
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyConfig {
    /// Question catalog file (JSON, or YAML by extension)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Directory finalized results are written to
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    /// Idle time after which a session expires
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// How often idle sessions are swept
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,

    /// How long an expired id is still reported as expired
    #[serde(default = "default_expired_retention")]
    pub expired_retention_secs: u64,
}

impl SurveyConfig {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    pub fn expired_retention(&self) -> Duration {
        Duration::from_secs(self.expired_retention_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("SURVEY__CATALOG_PATH"));
        }
        if self.results_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("SURVEY__RESULTS_DIR"));
        }
        if self.session_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if self.sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidSweepInterval);
        }
        Ok(())
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            results_dir: default_results_dir(),
            session_ttl_secs: default_session_ttl(),
            sweep_interval_secs: default_sweep_interval(),
            expired_retention_secs: default_expired_retention(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/survey_questions.json")
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("survey_results")
}

fn default_session_ttl() -> u64 {
    30 * 60
}

fn default_sweep_interval() -> u64 {
    60
}

fn default_expired_retention() -> u64 {
    24 * 60 * 60
}
