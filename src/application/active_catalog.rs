//! Active catalog holder.
//!
//! Keeps the catalog snapshot new sessions are created against. A reload
//! swaps the snapshot atomically; sessions already running keep the
//! snapshot they were created with.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::{CatalogError, QuestionCatalog};
use crate::ports::CatalogSource;

pub struct ActiveCatalog {
    source: Arc<dyn CatalogSource>,
    current: RwLock<Arc<QuestionCatalog>>,
}

impl ActiveCatalog {
    /// Loads the initial catalog; any error here is fatal for startup.
    pub async fn load(source: Arc<dyn CatalogSource>) -> Result<Self, CatalogError> {
        let catalog = source.load().await?;
        tracing::info!(
            source = %source.describe(),
            questions = catalog.len(),
            "Question catalog loaded"
        );
        Ok(Self {
            source,
            current: RwLock::new(Arc::new(catalog)),
        })
    }

    /// The snapshot new sessions should pin.
    pub async fn snapshot(&self) -> Arc<QuestionCatalog> {
        Arc::clone(&*self.current.read().await)
    }

    /// Re-reads the source. On error the current snapshot stays active.
    pub async fn reload(&self) -> Result<Arc<QuestionCatalog>, CatalogError> {
        match self.source.load().await {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                *self.current.write().await = Arc::clone(&catalog);
                tracing::info!(
                    source = %self.source.describe(),
                    questions = catalog.len(),
                    "Question catalog reloaded"
                );
                Ok(catalog)
            }
            Err(err) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    error = %err,
                    "Catalog reload failed, keeping current catalog"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryCatalogSource;
    use crate::domain::catalog::{AnswerOption, Cardinality, Question};

    fn question(id: i64) -> Question {
        Question::new(
            id,
            format!("Question {}", id),
            Cardinality::Single,
            vec![AnswerOption::new("A", "a")],
        )
    }

    #[tokio::test]
    async fn load_fails_on_invalid_catalog() {
        let source = Arc::new(InMemoryCatalogSource::new(vec![]));
        assert!(matches!(
            ActiveCatalog::load(source).await,
            Err(CatalogError::Empty)
        ));
    }

    #[tokio::test]
    async fn reload_swaps_snapshot_but_old_snapshots_survive() {
        let source = Arc::new(InMemoryCatalogSource::new(vec![question(1)]));
        let active = ActiveCatalog::load(source.clone()).await.unwrap();
        let pinned = active.snapshot().await;

        source.replace(vec![question(1), question(2)]).await;
        active.reload().await.unwrap();

        assert_eq!(pinned.len(), 1);
        assert_eq!(active.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn failed_reload_keeps_current_catalog() {
        let source = Arc::new(InMemoryCatalogSource::new(vec![question(1)]));
        let active = ActiveCatalog::load(source.clone()).await.unwrap();

        source.replace(vec![question(1), question(1)]).await;
        assert!(matches!(
            active.reload().await,
            Err(CatalogError::DuplicateQuestionId(_))
        ));
        assert_eq!(active.snapshot().await.len(), 1);
    }
}
