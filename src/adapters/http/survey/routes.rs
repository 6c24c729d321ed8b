//! HTTP routes for the survey conversation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    health, list_questions, send_message, start_session, start_session_with_id, SurveyHandlers,
};

/// Creates the survey router with all endpoints.
pub fn survey_routes(handlers: SurveyHandlers) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/chat/start", post(start_session))
        .route("/chat/start/:session_id", post(start_session_with_id))
        .route("/chat/message", post(send_message))
        .route("/survey/questions", get(list_questions))
        .with_state(handlers)
}
