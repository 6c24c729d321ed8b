//! Validated, ordered question catalog.

use std::collections::HashSet;

use super::{CatalogError, Question};

/// Immutable ordered list of questions; the order is the survey order.
///
/// # Invariants
///
/// - at least one question
/// - question ids are unique
/// - every question has a non-empty prompt and at least one option
/// - option codes are non-empty and unique within their question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds a catalog, rejecting anything that breaks the invariants.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen_ids = HashSet::new();
        for question in &questions {
            if !seen_ids.insert(&question.id) {
                return Err(CatalogError::DuplicateQuestionId(question.id.clone()));
            }
            Self::validate_question(question)?;
        }

        Ok(Self { questions })
    }

    fn validate_question(question: &Question) -> Result<(), CatalogError> {
        if question.prompt.trim().is_empty() {
            return Err(CatalogError::EmptyPrompt {
                question_id: question.id.clone(),
            });
        }
        if question.options.is_empty() {
            return Err(CatalogError::NoOptions {
                question_id: question.id.clone(),
            });
        }

        let mut seen_codes = HashSet::new();
        for option in &question.options {
            if option.code.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyOptionCode {
                    question_id: question.id.clone(),
                });
            }
            if !seen_codes.insert(&option.code) {
                return Err(CatalogError::DuplicateOptionCode {
                    question_id: question.id.clone(),
                    code: option.code.clone(),
                });
            }
        }
        Ok(())
    }

    /// Question at `cursor`, or `None` once the cursor is past the end.
    pub fn get(&self, cursor: usize) -> Option<&Question> {
        self.questions.get(cursor)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
