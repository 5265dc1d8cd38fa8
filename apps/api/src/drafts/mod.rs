//! Session-scoped drafts: work-in-progress posts keyed by a client session.

pub mod handlers;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

pub const MAX_SESSIONS: usize = 5_000;
pub const MAX_DRAFTS_PER_SESSION: usize = 25;
/// Sessions untouched for this long are dropped when room is needed.
pub const SESSION_IDLE_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub session_id: String,
    pub key: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("a session may hold at most {0} drafts")]
    TooManyDrafts(usize),

    #[error("draft storage is full ({0} active sessions)")]
    TooManySessions(usize),
}

/// Storage seam for drafts. Sessions never see each other's entries.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// All drafts of a session, most recently updated first.
    async fn list(&self, session_id: &str) -> Vec<Draft>;
    /// Inserts or replaces a draft. New keys and new sessions are subject to
    /// the store's capacity.
    async fn put(&self, session_id: &str, key: &str, content: String) -> Result<Draft, DraftError>;
    /// Returns false when the draft did not exist.
    async fn remove(&self, session_id: &str, key: &str) -> bool;
}

#[derive(Debug)]
pub struct InMemoryDraftStore {
    sessions: RwLock<HashMap<String, HashMap<String, Draft>>>,
    max_sessions: usize,
    max_drafts_per_session: usize,
    idle_after: Duration,
}

impl Default for InMemoryDraftStore {
    fn default() -> Self {
        Self::with_limits(
            MAX_SESSIONS,
            MAX_DRAFTS_PER_SESSION,
            Duration::days(SESSION_IDLE_DAYS),
        )
    }
}

impl InMemoryDraftStore {
    pub fn with_limits(max_sessions: usize, max_drafts_per_session: usize, idle_after: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
            max_drafts_per_session,
            idle_after,
        }
    }
}

fn last_activity(drafts: &HashMap<String, Draft>) -> Option<DateTime<Utc>> {
    drafts.values().map(|d| d.updated_at).max()
}

#[async_trait]
impl DraftStore for InMemoryDraftStore {
    async fn list(&self, session_id: &str) -> Vec<Draft> {
        let sessions = self.sessions.read().await;
        let mut drafts: Vec<Draft> = sessions
            .get(session_id)
            .map(|drafts| drafts.values().cloned().collect())
            .unwrap_or_default();
        drafts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.key.cmp(&b.key)));
        drafts
    }

    async fn put(&self, session_id: &str, key: &str, content: String) -> Result<Draft, DraftError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        if !sessions.contains_key(session_id) && sessions.len() >= self.max_sessions {
            let cutoff = now - self.idle_after;
            let before = sessions.len();
            sessions.retain(|_, drafts| last_activity(drafts).is_some_and(|t| t > cutoff));
            let evicted = before - sessions.len();
            if evicted > 0 {
                info!("Evicted {evicted} idle draft sessions");
            }
            if sessions.len() >= self.max_sessions {
                return Err(DraftError::TooManySessions(self.max_sessions));
            }
        }

        let drafts = sessions.entry(session_id.to_string()).or_default();
        if !drafts.contains_key(key) && drafts.len() >= self.max_drafts_per_session {
            return Err(DraftError::TooManyDrafts(self.max_drafts_per_session));
        }

        let draft = Draft {
            session_id: session_id.to_string(),
            key: key.to_string(),
            content,
            updated_at: now,
        };
        drafts.insert(key.to_string(), draft.clone());

        debug!(session_id, key, "Draft stored");
        Ok(draft)
    }

    async fn remove(&self, session_id: &str, key: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        let Some(drafts) = sessions.get_mut(session_id) else {
            return false;
        };
        let removed = drafts.remove(key).is_some();
        if drafts.is_empty() {
            sessions.remove(session_id);
        }
        removed
    }
}
