//! HTTP adapter for the survey conversation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatMessageRequest, OptionResponse, QuestionResponse, StatusResponse, TurnResponse};
pub use handlers::SurveyHandlers;
pub use routes::survey_routes;
