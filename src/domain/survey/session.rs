//! Survey session aggregate.
//!
//! A session walks a pinned catalog snapshot from the first question to
//! past the last one. Only the registry owns sessions; everything else
//! reaches them through a registry handle.

use std::sync::Arc;

use crate::domain::catalog::{Question, QuestionCatalog};
use crate::domain::foundation::{SessionId, StateMachine, SurveyStatus, Timestamp};

use super::{AnswerRecord, ClassificationOutcome, Finalization, SurveyError, SurveyResult};

/// What applying a classification outcome did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Outcome was unclear; nothing changed.
    Unchanged,
    /// Answer recorded, another question follows.
    NextQuestion,
    /// Answer recorded and the last question is done.
    Completed,
}

/// Survey session aggregate.
///
/// # Invariants
///
/// - `answers.len() == cursor`
/// - `cursor` never decreases and never exceeds `catalog.len()`
/// - `status` is `Completed` iff `cursor == catalog.len()`
/// - every recorded code belongs to the answered question
/// - `finalization` is set at most once, and only when completed
#[derive(Debug, Clone)]
pub struct SurveySession {
    id: SessionId,
    catalog: Arc<QuestionCatalog>,
    cursor: usize,
    answers: Vec<AnswerRecord>,
    started_at: Timestamp,
    status: SurveyStatus,
    finalization: Option<Finalization>,
}

impl SurveySession {
    /// Starts a session at the first question of `catalog`.
    pub fn new(id: SessionId, catalog: Arc<QuestionCatalog>) -> Self {
        let status = SurveyStatus::from_cursor(0, catalog.len());
        Self {
            id,
            catalog,
            cursor: 0,
            answers: Vec::new(),
            started_at: Timestamp::now(),
            status,
            finalization: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn status(&self) -> SurveyStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == SurveyStatus::Completed
    }

    /// The catalog snapshot this session was created against.
    pub fn catalog(&self) -> &Arc<QuestionCatalog> {
        &self.catalog
    }

    /// Question awaiting an answer, or `None` once completed.
    pub fn current_question(&self) -> Option<&Question> {
        self.catalog.get(self.cursor)
    }

    pub fn finalization(&self) -> Option<&Finalization> {
        self.finalization.as_ref()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalization.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Behavior
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a classification outcome for the current question.
    ///
    /// The outcome is first narrowed to the current question's options, so a
    /// classifier can never write foreign codes into the log.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if the session is past its last question
    /// - `InvalidAnswer` if the utterance is blank
    pub fn apply(
        &mut self,
        outcome: ClassificationOutcome,
        utterance: &str,
    ) -> Result<Advance, SurveyError> {
        self.ensure_active()?;
        if utterance.trim().is_empty() {
            return Err(SurveyError::invalid_answer("answer cannot be empty"));
        }

        let question = self
            .current_question()
            .ok_or_else(|| SurveyError::already_completed(self.id))?;

        let codes = match outcome.restrict_to(question) {
            ClassificationOutcome::Unclear => return Ok(Advance::Unchanged),
            ClassificationOutcome::Matched(codes) => codes,
        };

        let record = AnswerRecord::new(question, codes, utterance);
        let next_cursor = self.cursor + 1;
        let next_status = self
            .status
            .transition_to(SurveyStatus::from_cursor(next_cursor, self.catalog.len()))?;

        self.answers.push(record);
        self.cursor = next_cursor;
        self.status = next_status;

        if self.is_completed() {
            Ok(Advance::Completed)
        } else {
            Ok(Advance::NextQuestion)
        }
    }

    /// Packages the answer log for a result sink.
    ///
    /// # Errors
    ///
    /// - `NotCompleted` if the session is still active
    /// - `AlreadyFinalized` if results were already handed off
    pub fn to_result(&self, completed_at: Timestamp) -> Result<SurveyResult, SurveyError> {
        self.ensure_finalizable()?;
        Ok(SurveyResult::new(self.id, completed_at, self.answers.clone()))
    }

    /// Records the finalization outcome. Allowed once per session.
    pub fn mark_finalized(&mut self, finalization: Finalization) -> Result<(), SurveyError> {
        self.ensure_finalizable()?;
        self.finalization = Some(finalization);
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), SurveyError> {
        if self.status.accepts_answers() {
            Ok(())
        } else {
            Err(SurveyError::already_completed(self.id))
        }
    }

    fn ensure_finalizable(&self) -> Result<(), SurveyError> {
        if !self.is_completed() {
            return Err(SurveyError::NotCompleted(self.id));
        }
        if self.is_finalized() {
            return Err(SurveyError::AlreadyFinalized(self.id));
        }
        Ok(())
    }
}
