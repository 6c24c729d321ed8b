//! In-memory session registry with idle expiry.
//!
//! Sessions live in a map behind one async `RwLock`; each value is an
//! `Arc<Mutex<SurveySession>>`, so the map lock is held only long enough to
//! clone a handle and turns for one session queue on that session's mutex.
//!
//! A session expires once it has been idle for longer than the TTL. Expired
//! sessions are evicted lazily on lookup and in bulk by `evict_expired`.
//! Evicted ids are kept as tombstones for a retention window so lookups can
//! report `Expired` rather than `NotFound`. Ids of completed sessions are
//! remembered for the life of the registry and are never handed out again.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::SessionId;
use crate::domain::survey::{SurveyError, SurveySession};
use crate::ports::{Registration, SessionHandle, SessionRegistry};

/// Expiry settings for the in-memory registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Idle time after which a session expires.
    pub ttl: Duration,
    /// How long an evicted id is still reported as expired.
    pub tombstone_retention: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30 * 60),
            tombstone_retention: Duration::from_secs(24 * 60 * 60),
        }
    }
}

#[derive(Debug)]
struct Entry {
    handle: SessionHandle,
    last_seen: Instant,
}

#[derive(Debug, Default)]
struct State {
    live: HashMap<SessionId, Entry>,
    /// Evicted ids and when they were evicted.
    tombstones: HashMap<SessionId, Instant>,
    /// Ids whose session reached COMPLETED before eviction.
    finalized: HashSet<SessionId>,
}

impl State {
    fn is_idle(&self, id: &SessionId, now: Instant, ttl: Duration) -> bool {
        self.live
            .get(id)
            .map_or(false, |entry| now.duration_since(entry.last_seen) > ttl)
    }

    /// Removes an idle session. A session whose lock is held is mid-turn and
    /// stays live.
    fn evict(&mut self, id: &SessionId, now: Instant) -> bool {
        let completed = match self.live.get(id) {
            Some(entry) => match entry.handle.try_lock() {
                Ok(session) => session.is_completed(),
                Err(_) => return false,
            },
            None => return false,
        };
        self.live.remove(id);
        self.tombstones.insert(*id, now);
        if completed {
            self.finalized.insert(*id);
        }
        true
    }

    fn prune_tombstones(&mut self, now: Instant, retention: Duration) {
        self.tombstones
            .retain(|_, evicted_at| now.duration_since(*evicted_at) <= retention);
    }
}

/// In-memory registry for survey sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionRegistry {
    state: Arc<RwLock<State>>,
    config: RegistryConfig,
}

impl InMemorySessionRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
            config,
        }
    }

    /// Number of remembered evicted ids.
    pub async fn tombstone_count(&self) -> usize {
        self.state.read().await.tombstones.len()
    }
}

impl Default for InMemorySessionRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn create(
        &self,
        id: Option<SessionId>,
        catalog: Arc<QuestionCatalog>,
    ) -> Result<Registration, SurveyError> {
        let now = Instant::now();
        let mut state = self.state.write().await;

        let id = match id {
            Some(id) => {
                if state.is_idle(&id, now, self.config.ttl) {
                    state.evict(&id, now);
                }
                if let Some(entry) = state.live.get_mut(&id) {
                    entry.last_seen = now;
                    return Ok(Registration {
                        handle: Arc::clone(&entry.handle),
                        created: false,
                    });
                }
                if state.finalized.contains(&id) {
                    tracing::info!(session_id = %id, "Refusing to reopen a completed session");
                    return Err(SurveyError::expired(id));
                }
                id
            }
            None => SessionId::new(),
        };

        state.tombstones.remove(&id);
        let handle = Arc::new(Mutex::new(SurveySession::new(id, catalog)));
        state.live.insert(
            id,
            Entry {
                handle: Arc::clone(&handle),
                last_seen: now,
            },
        );
        tracing::debug!(session_id = %id, live_sessions = state.live.len(), "Registered session");

        Ok(Registration {
            handle,
            created: true,
        })
    }

    async fn get(&self, id: &SessionId) -> Result<SessionHandle, SurveyError> {
        let now = Instant::now();
        let mut state = self.state.write().await;

        if state.is_idle(id, now, self.config.ttl) && state.evict(id, now) {
            tracing::info!(session_id = %id, "Session expired on lookup");
            return Err(SurveyError::expired(*id));
        }

        if let Some(entry) = state.live.get_mut(id) {
            entry.last_seen = now;
            return Ok(Arc::clone(&entry.handle));
        }

        let tombstoned = state
            .tombstones
            .get(id)
            .map_or(false, |evicted_at| {
                now.duration_since(*evicted_at) <= self.config.tombstone_retention
            });
        if tombstoned || state.finalized.contains(id) {
            Err(SurveyError::expired(*id))
        } else {
            Err(SurveyError::not_found(*id))
        }
    }

    async fn evict_expired(&self) -> usize {
        let now = Instant::now();
        let mut state = self.state.write().await;

        let idle: Vec<SessionId> = state
            .live
            .iter()
            .filter(|(_, entry)| now.duration_since(entry.last_seen) > self.config.ttl)
            .map(|(id, _)| *id)
            .collect();
        let evicted = idle.iter().filter(|id| state.evict(id, now)).count();
        state.prune_tombstones(now, self.config.tombstone_retention);

        if evicted > 0 {
            tracing::info!(
                evicted,
                live_sessions = state.live.len(),
                "Evicted idle sessions"
            );
        }
        evicted
    }

    async fn len(&self) -> usize {
        self.state.read().await.live.len()
    }
}
