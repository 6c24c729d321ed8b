//! StartSessionHandler - Command handler for starting or resuming a survey.

use std::sync::Arc;

use crate::application::ActiveCatalog;
use crate::domain::foundation::SessionId;
use crate::domain::survey::{SurveyError, Turn};
use crate::ports::SessionRegistry;

/// Command to start a survey session.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    /// Caller-chosen id; a fresh one is generated when absent.
    pub session_id: Option<SessionId>,
}

/// Handler for starting sessions.
///
/// Starting with the id of a live session resumes it unchanged.
pub struct StartSessionHandler {
    registry: Arc<dyn SessionRegistry>,
    catalog: Arc<ActiveCatalog>,
}

impl StartSessionHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, catalog: Arc<ActiveCatalog>) -> Self {
        Self { registry, catalog }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<Turn, SurveyError> {
        let snapshot = self.catalog.snapshot().await;
        let registration = self.registry.create(cmd.session_id, snapshot).await?;
        let session = registration.handle.lock().await;

        if registration.created {
            tracing::info!(session_id = %session.id(), "Survey session started");
            Ok(Turn::welcome(&session))
        } else {
            tracing::debug!(
                session_id = %session.id(),
                cursor = session.cursor(),
                completed = session.is_completed(),
                "Survey session resumed"
            );
            Ok(Turn::resumed(&session))
        }
    }
}
