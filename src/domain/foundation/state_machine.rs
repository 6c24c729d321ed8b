//! State machine trait for status enums.
//!
//! Gives lifecycle statuses a uniform way to declare and check their
//! allowed transitions.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors list their valid transitions and get validated
/// transition and terminal-state checks for free.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SurveyStatus;

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let result = SurveyStatus::Active.transition_to(SurveyStatus::Completed);
        assert_eq!(result, Ok(SurveyStatus::Completed));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let result = SurveyStatus::Completed.transition_to(SurveyStatus::Active);
        assert!(result.is_err());
    }

    #[test]
    fn completed_is_terminal() {
        assert!(SurveyStatus::Completed.is_terminal());
        assert!(!SurveyStatus::Active.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for status in [SurveyStatus::Active, SurveyStatus::Completed] {
            for target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&target),
                    "{:?} -> {:?} should be allowed",
                    status,
                    target
                );
            }
        }
    }
}
