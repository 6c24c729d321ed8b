//! ListCatalogHandler - Query handler for the active question catalog.

use std::sync::Arc;

use crate::application::ActiveCatalog;
use crate::domain::catalog::QuestionCatalog;

/// Handler returning the catalog new sessions are created against.
pub struct ListCatalogHandler {
    catalog: Arc<ActiveCatalog>,
}

impl ListCatalogHandler {
    pub fn new(catalog: Arc<ActiveCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Arc<QuestionCatalog> {
        self.catalog.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryCatalogSource;
    use crate::domain::catalog::{AnswerOption, Cardinality, Question};

    #[tokio::test]
    async fn returns_questions_in_catalog_order() {
        let source = InMemoryCatalogSource::new(vec![
            Question::new(2, "Second?", Cardinality::Single, vec![AnswerOption::new("A", "a")]),
            Question::new(1, "First?", Cardinality::Multi, vec![AnswerOption::new("B", "b")]),
        ]);
        let active = Arc::new(ActiveCatalog::load(Arc::new(source)).await.unwrap());

        let catalog = ListCatalogHandler::new(active).handle().await;

        let prompts: Vec<&str> = catalog.questions().iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["Second?", "First?"]);
    }
}
