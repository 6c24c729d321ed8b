//! Session Registry Port - ownership and lookup of live survey sessions.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::SessionId;
use crate::domain::survey::{SurveyError, SurveySession};

/// Shared handle to one session.
///
/// Holding the lock is the only way to read or change a session, which
/// serializes turns for the same id.
pub type SessionHandle = Arc<Mutex<SurveySession>>;

/// Result of `SessionRegistry::create`.
#[derive(Debug, Clone)]
pub struct Registration {
    pub handle: SessionHandle,
    /// False when the id already belonged to a live session.
    pub created: bool,
}

/// Port for the keyed store of live sessions.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Create a session, or return the live one already registered under `id`.
    ///
    /// Without an id a fresh one is generated. A new session pins `catalog`.
    ///
    /// # Errors
    /// - `SurveyError::Expired` if `id` belonged to a session that completed
    ///   and was evicted; a completed id is never reopened
    async fn create(
        &self,
        id: Option<SessionId>,
        catalog: Arc<QuestionCatalog>,
    ) -> Result<Registration, SurveyError>;

    /// Look up a live session; counts as activity for expiry purposes.
    ///
    /// # Errors
    /// - `SurveyError::Expired` if the id belonged to an evicted session
    /// - `SurveyError::NotFound` if the id was never seen
    async fn get(&self, id: &SessionId) -> Result<SessionHandle, SurveyError>;

    /// Evict every session idle for longer than the TTL. Returns the count.
    async fn evict_expired(&self) -> usize;

    /// Number of live sessions.
    async fn len(&self) -> usize;
}
