//! Axum route handlers for session drafts.

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::drafts::Draft;
use crate::errors::AppError;
use crate::extract::{required_text, AppJson, AppPath};
use crate::state::AppState;

const MAX_ID_LEN: usize = 128;
const MAX_CONTENT_CHARS: usize = 20_000;

#[derive(Debug, Deserialize)]
pub struct PutDraftRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DraftList {
    pub drafts: Vec<Draft>,
}

fn check_id(value: &str, field: &str) -> Result<(), AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_ID_LEN {
        return Err(AppError::Validation(format!(
            "{field} must be between 1 and {MAX_ID_LEN} characters"
        )));
    }
    Ok(())
}

/// GET /api/drafts/:session
pub async fn handle_list_drafts(
    State(state): State<AppState>,
    AppPath(session_id): AppPath<String>,
) -> Result<AppJson<DraftList>, AppError> {
    check_id(&session_id, "session")?;
    let drafts = state.drafts.list(session_id.trim()).await;
    Ok(AppJson(DraftList { drafts }))
}

/// PUT /api/drafts/:session/:key
pub async fn handle_put_draft(
    State(state): State<AppState>,
    AppPath((session_id, key)): AppPath<(String, String)>,
    AppJson(request): AppJson<PutDraftRequest>,
) -> Result<AppJson<Draft>, AppError> {
    check_id(&session_id, "session")?;
    check_id(&key, "key")?;
    // Drafts keep their own whitespace; only emptiness is rejected.
    required_text(request.content.clone(), "content")?;
    let content = request.content.unwrap_or_default();
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(AppError::Validation(format!(
            "content must be at most {MAX_CONTENT_CHARS} characters"
        )));
    }

    let draft = state
        .drafts
        .put(session_id.trim(), key.trim(), content)
        .await?;
    Ok(AppJson(draft))
}

/// DELETE /api/drafts/:session/:key
pub async fn handle_delete_draft(
    State(state): State<AppState>,
    AppPath((session_id, key)): AppPath<(String, String)>,
) -> Result<StatusCode, AppError> {
    check_id(&session_id, "session")?;
    check_id(&key, "key")?;

    if state.drafts.remove(session_id.trim(), key.trim()).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Draft '{}' not found", key.trim())))
    }
}
