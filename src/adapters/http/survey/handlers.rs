//! HTTP handlers for the survey conversation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{survey_error_response, ErrorResponse};
use crate::application::handlers::survey::{
    ListCatalogHandler, StartSessionCommand, StartSessionHandler, SubmitUtteranceCommand,
    SubmitUtteranceHandler,
};
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::survey::{SurveyError, Turn};

use super::dto::{ChatMessageRequest, QuestionResponse, StatusResponse, TurnResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SurveyHandlers {
    start_handler: Arc<StartSessionHandler>,
    submit_handler: Arc<SubmitUtteranceHandler>,
    list_handler: Arc<ListCatalogHandler>,
    verbose_errors: bool,
}

impl SurveyHandlers {
    pub fn new(
        start_handler: Arc<StartSessionHandler>,
        submit_handler: Arc<SubmitUtteranceHandler>,
        list_handler: Arc<ListCatalogHandler>,
    ) -> Self {
        Self {
            start_handler,
            submit_handler,
            list_handler,
            verbose_errors: false,
        }
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    fn turn_response(&self, result: Result<Turn, SurveyError>) -> Response {
        match result {
            Ok(turn) => (StatusCode::OK, Json(TurnResponse::from(turn))).into_response(),
            Err(e) => survey_error_response(e, self.verbose_errors),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Liveness check
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "API is running".to_string(),
    })
}

/// POST /chat/start - Start a new session
pub async fn start_session(State(handlers): State<SurveyHandlers>) -> Response {
    let result = handlers
        .start_handler
        .handle(StartSessionCommand::default())
        .await;
    handlers.turn_response(result)
}

/// POST /chat/start/:session_id - Start or resume a session with a chosen id
pub async fn start_session_with_id(
    State(handlers): State<SurveyHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(err) => return handlers.turn_response(Err(err.into())),
    };

    let result = handlers
        .start_handler
        .handle(StartSessionCommand {
            session_id: Some(session_id),
        })
        .await;
    handlers.turn_response(result)
}

/// POST /chat/message - Submit one answer
pub async fn send_message(
    State(handlers): State<SurveyHandlers>,
    Json(req): Json<ChatMessageRequest>,
) -> Response {
    let session_id = match req.session_id.as_deref().map(str::trim) {
        None | Some("") => {
            return ErrorResponse::new(
                ErrorCode::SessionNotFound.to_string(),
                "Session not found. Start a new session first.",
            )
            .into_response_with(StatusCode::NOT_FOUND)
        }
        Some(raw) => match raw.parse::<SessionId>() {
            Ok(id) => id,
            Err(err) => return handlers.turn_response(Err(err.into())),
        },
    };

    let cmd = SubmitUtteranceCommand {
        session_id,
        utterance: req.message,
    };
    let result = handlers.submit_handler.handle(cmd).await;
    handlers.turn_response(result)
}

/// GET /survey/questions - List the active catalog
pub async fn list_questions(State(handlers): State<SurveyHandlers>) -> Json<Vec<QuestionResponse>> {
    let catalog = handlers.list_handler.handle().await;
    Json(catalog.questions().iter().map(QuestionResponse::from).collect())
}
