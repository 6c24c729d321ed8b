//! Survey domain module.
//!
//! Holds the session state machine that walks a respondent through the
//! catalog, together with the values it produces: answer records,
//! classification outcomes, turns and finalized results.

mod answer;
mod errors;
pub mod messages;
mod outcome;
mod result;
mod session;
mod turn;

pub use answer::AnswerRecord;
pub use errors::SurveyError;
pub use outcome::ClassificationOutcome;
pub use result::{Finalization, SurveyResult};
pub use session::{Advance, SurveySession};
pub use turn::{Turn, TurnKind};
