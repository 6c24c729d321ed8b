//! Catalog Source Port - where the question catalog comes from.

use async_trait::async_trait;

use crate::domain::catalog::{CatalogError, QuestionCatalog};

/// Port for loading a validated question catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and validate the full catalog.
    ///
    /// # Errors
    /// Returns `CatalogError` if the source cannot be read or holds an
    /// invalid catalog.
    async fn load(&self) -> Result<QuestionCatalog, CatalogError>;

    /// Human-readable description of the source, for logs.
    fn describe(&self) -> String;
}
