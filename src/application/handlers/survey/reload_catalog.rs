//! ReloadCatalogHandler - Command handler for re-reading the question catalog.

use std::sync::Arc;

use crate::application::ActiveCatalog;
use crate::domain::survey::SurveyError;

/// Result of a successful reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadCatalogResult {
    pub question_count: usize,
}

/// Handler for administrative catalog reloads.
pub struct ReloadCatalogHandler {
    catalog: Arc<ActiveCatalog>,
}

impl ReloadCatalogHandler {
    pub fn new(catalog: Arc<ActiveCatalog>) -> Self {
        Self { catalog }
    }

    /// Reloads the catalog. Running sessions are unaffected either way.
    pub async fn handle(&self) -> Result<ReloadCatalogResult, SurveyError> {
        let catalog = self.catalog.reload().await?;
        Ok(ReloadCatalogResult {
            question_count: catalog.len(),
        })
    }
}
