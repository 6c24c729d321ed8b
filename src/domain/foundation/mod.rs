//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the survey domain.

mod errors;
mod ids;
mod state_machine;
mod survey_status;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::SessionId;
pub use state_machine::StateMachine;
pub use survey_status::SurveyStatus;
pub use timestamp::Timestamp;
