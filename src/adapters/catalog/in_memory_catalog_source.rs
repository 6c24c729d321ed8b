//! In-Memory Catalog Source Adapter
//!
//! Serves a catalog held in memory. Tests swap the questions to exercise reload.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::{CatalogError, Question, QuestionCatalog};
use crate::ports::CatalogSource;

/// In-memory catalog source
#[derive(Debug, Clone)]
pub struct InMemoryCatalogSource {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryCatalogSource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(questions)),
        }
    }

    /// Replaces the questions served by the next `load`.
    pub async fn replace(&self, questions: Vec<Question>) {
        *self.questions.write().await = questions;
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn load(&self) -> Result<QuestionCatalog, CatalogError> {
        let questions = self.questions.read().await.clone();
        QuestionCatalog::new(questions)
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
