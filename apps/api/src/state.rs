use std::sync::Arc;

use sqlx::PgPool;

use crate::drafts::DraftStore;
use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Completion backend. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn ChatCompletion>,
    /// Session-scoped drafts.
    pub drafts: Arc<dyn DraftStore>,
}
