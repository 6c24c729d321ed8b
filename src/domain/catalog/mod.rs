//! Question catalog domain module.
//!
//! The catalog is the ordered, immutable list of questions a survey walks
//! through. It is validated once when built; a catalog that exists is
//! always well formed.

mod catalog;
mod errors;
mod question;

pub use catalog::QuestionCatalog;
pub use errors::CatalogError;
pub use question::{AnswerOption, Cardinality, OptionCode, Question, QuestionId};
