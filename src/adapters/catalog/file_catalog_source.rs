//! File-based Catalog Source Adapter
//!
//! Reads the question catalog from a JSON array on disk. Files ending in
//! `.yaml`/`.yml` are read as YAML with the same structure.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::catalog::{CatalogError, Question, QuestionCatalog};
use crate::ports::CatalogSource;

/// Catalog file format, picked from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") | None => Ok(CatalogFormat::Json),
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            Some(other) => Err(CatalogError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// File-based catalog source
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn parse(format: CatalogFormat, raw: &str) -> Result<Vec<Question>, CatalogError> {
        match format {
            CatalogFormat::Json => {
                serde_json::from_str(raw).map_err(|e| CatalogError::parse(e.to_string()))
            }
            CatalogFormat::Yaml => {
                serde_yaml::from_str(raw).map_err(|e| CatalogError::parse(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<QuestionCatalog, CatalogError> {
        let format = CatalogFormat::from_path(&self.path)?;

        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::io(self.path.display().to_string(), e.to_string()))?;

        let questions = Self::parse(format, &raw)?;
        QuestionCatalog::new(questions)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
