//! Axum route handlers for the saved posts API.

use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{optional_text, AppJson, AppPath, AppQuery};
use crate::saved_posts::models::{ListQuery, SavePostRequest, SavedPostRow, UpdateNotesRequest};
use crate::saved_posts::repository;
use crate::state::AppState;

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Saved post {id} not found"))
}

/// GET /api/saved-posts?limit=N
pub async fn handle_list_posts(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<AppJson<Vec<SavedPostRow>>, AppError> {
    let limit = query.page_size()?;
    Ok(AppJson(repository::list_posts(&state.db, limit).await?))
}

/// POST /api/saved-posts
pub async fn handle_create_post(
    State(state): State<AppState>,
    AppJson(request): AppJson<SavePostRequest>,
) -> Result<(StatusCode, AppJson<SavedPostRow>), AppError> {
    let post = request.validate()?;
    let row = repository::create_post(&state.db, &post).await?;
    Ok((StatusCode::CREATED, AppJson(row)))
}

/// GET /api/saved-posts/:id
pub async fn handle_get_post(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<AppJson<SavedPostRow>, AppError> {
    repository::get_post(&state.db, id)
        .await?
        .map(AppJson)
        .ok_or_else(|| not_found(id))
}

/// PATCH /api/saved-posts/:id
pub async fn handle_update_notes(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(request): AppJson<UpdateNotesRequest>,
) -> Result<AppJson<SavedPostRow>, AppError> {
    let notes = optional_text(request.notes);
    repository::update_notes(&state.db, id, notes.as_deref())
        .await?
        .map(AppJson)
        .ok_or_else(|| not_found(id))
}

/// DELETE /api/saved-posts/:id
pub async fn handle_delete_post(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    if repository::delete_post(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
