//! HTTP DTOs for administrative endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::survey::ReloadCatalogResult;

/// Response for a successful catalog reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadCatalogResponse {
    pub message: String,
    pub question_count: usize,
}

impl From<ReloadCatalogResult> for ReloadCatalogResponse {
    fn from(result: ReloadCatalogResult) -> Self {
        Self {
            message: "Catalog reloaded".to_string(),
            question_count: result.question_count,
        }
    }
}
