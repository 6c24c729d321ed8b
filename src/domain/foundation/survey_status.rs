//! SurveyStatus enum for the lifecycle of a survey session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a survey session.
///
/// Never stored on its own: a session is `Completed` exactly when its
/// cursor has moved past the last question of its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    #[default]
    Active,
    Completed,
}

impl SurveyStatus {
    /// Derives the status from a cursor position and catalog size.
    pub fn from_cursor(cursor: usize, catalog_len: usize) -> Self {
        if cursor >= catalog_len {
            SurveyStatus::Completed
        } else {
            SurveyStatus::Active
        }
    }

    /// Returns true if the session still accepts answers.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, SurveyStatus::Active)
    }
}

impl StateMachine for SurveyStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SurveyStatus::*;
        matches!((self, target), (Active, Active) | (Active, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            SurveyStatus::Active => vec![SurveyStatus::Active, SurveyStatus::Completed],
            SurveyStatus::Completed => vec![],
        }
    }
}

impl fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SurveyStatus::Active => "Active",
            SurveyStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
