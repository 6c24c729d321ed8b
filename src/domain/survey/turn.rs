//! Conversational turn returned to the respondent.

use crate::domain::catalog::Question;
use crate::domain::foundation::SessionId;

use super::{messages, SurveySession};

/// Why a turn was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    Welcome,
    Resumed,
    Reprompt,
    NextQuestion,
    Completed,
}

/// One system reply in the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub session_id: SessionId,
    pub kind: TurnKind,
    pub message: String,
    pub current_question: Option<Question>,
    pub completed: bool,
    /// Set only on turns of a completed session.
    pub results_saved: Option<bool>,
}

impl Turn {
    fn from_session(session: &SurveySession, kind: TurnKind, message: String) -> Self {
        let completed = session.is_completed();
        Self {
            session_id: *session.id(),
            kind,
            message,
            current_question: session.current_question().cloned(),
            completed,
            results_saved: completed
                .then(|| session.finalization().map_or(false, |f| f.is_stored())),
        }
    }

    pub fn welcome(session: &SurveySession) -> Self {
        match session.current_question() {
            Some(first) => Self::from_session(session, TurnKind::Welcome, messages::welcome(first)),
            None => Self::completion(session),
        }
    }

    /// Turn for re-entering an existing session without changing it.
    pub fn resumed(session: &SurveySession) -> Self {
        match session.current_question() {
            Some(current) => {
                Self::from_session(session, TurnKind::Resumed, messages::resume(current))
            }
            None => Self::from_session(
                session,
                TurnKind::Resumed,
                messages::completion(session.finalization(), session.answers().len()),
            ),
        }
    }

    pub fn reprompt(session: &SurveySession) -> Self {
        let message = session
            .current_question()
            .map(messages::reprompt)
            .unwrap_or_default();
        Self::from_session(session, TurnKind::Reprompt, message)
    }

    pub fn next_question(session: &SurveySession, acknowledgement: &str) -> Self {
        let message = session
            .current_question()
            .map(|next| messages::next_question(acknowledgement, next))
            .unwrap_or_default();
        Self::from_session(session, TurnKind::NextQuestion, message)
    }

    pub fn completion(session: &SurveySession) -> Self {
        let message = messages::completion(session.finalization(), session.answers().len());
        Self::from_session(session, TurnKind::Completed, message)
    }
}
