//! Axum route handlers for the custom tones API.

use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;
use crate::tones::models::{CustomToneRow, ToneRequest};
use crate::tones::repository;

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Custom tone {id} not found"))
}

/// GET /api/tones
pub async fn handle_list_tones(
    State(state): State<AppState>,
) -> Result<AppJson<Vec<CustomToneRow>>, AppError> {
    Ok(AppJson(repository::list_tones(&state.db).await?))
}

/// POST /api/tones
pub async fn handle_create_tone(
    State(state): State<AppState>,
    AppJson(request): AppJson<ToneRequest>,
) -> Result<(StatusCode, AppJson<CustomToneRow>), AppError> {
    let input = request.validate()?;
    let row = repository::create_tone(&state.db, &input).await?;
    Ok((StatusCode::CREATED, AppJson(row)))
}

/// GET /api/tones/:id
pub async fn handle_get_tone(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<AppJson<CustomToneRow>, AppError> {
    repository::get_tone(&state.db, id)
        .await?
        .map(AppJson)
        .ok_or_else(|| not_found(id))
}

/// PUT /api/tones/:id
pub async fn handle_update_tone(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(request): AppJson<ToneRequest>,
) -> Result<AppJson<CustomToneRow>, AppError> {
    let input = request.validate()?;
    repository::update_tone(&state.db, id, &input)
        .await?
        .map(AppJson)
        .ok_or_else(|| not_found(id))
}

/// DELETE /api/tones/:id
pub async fn handle_delete_tone(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    if repository::delete_tone(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use sqlx::PgPool;

    use crate::test_support::{post_json, send, state_with_pool, test_state, StubLlm};

    #[tokio::test]
    async fn test_create_requires_name() {
        let llm = StubLlm::replying("unused");
        let (status, body) =
            post_json(&llm, "/api/tones", json!({"description": "calm"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "name is required");
    }

    #[tokio::test]
    async fn test_update_validates_before_touching_storage() {
        let state = test_state(StubLlm::replying("unused"));
        let (status, body) = send(
            state,
            Method::PUT,
            "/api/tones/7f1d4f43-0d8c-4c8e-9a57-bb0c1c1e2a10",
            Some(json!({"name": "x", "description": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "description is required");
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected() {
        let state = test_state(StubLlm::replying("unused"));
        let (status, body) = send(state, Method::GET, "/api/tones/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid path"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_crud_cycle(pool: PgPool) {
        let state = state_with_pool(pool, StubLlm::replying("unused"));
        let (status, created) = send(
            state.clone(),
            Method::POST,
            "/api/tones",
            Some(json!({"name": " Dry wit ", "description": "understated", "examplePost": "Another Monday."})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Dry wit");
        let uri = format!("/api/tones/{}", created["id"].as_str().unwrap());

        let (status, body) = send(state.clone(), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["examplePost"], "Another Monday.");

        let (status, body) = send(
            state.clone(),
            Method::PUT,
            &uri,
            Some(json!({"name": "Dry wit", "description": "sardonic"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["description"], "sardonic");
        assert!(body["examplePost"].is_null());

        let (status, body) = send(state.clone(), Method::GET, "/api/tones", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, _) = send(state.clone(), Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(state, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_missing_tone_is_not_found(pool: PgPool) {
        let state = state_with_pool(pool, StubLlm::replying("unused"));
        let (status, body) = send(
            state,
            Method::GET,
            "/api/tones/7f1d4f43-0d8c-4c8e-9a57-bb0c1c1e2a10",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"],
            "Custom tone 7f1d4f43-0d8c-4c8e-9a57-bb0c1c1e2a10 not found"
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_duplicate_name_is_reworded(pool: PgPool) {
        let state = state_with_pool(pool, StubLlm::replying("unused"));
        let tone = json!({"name": "Calm", "description": "steady"});
        let (status, _) = send(state.clone(), Method::POST, "/api/tones", Some(tone.clone())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(state, Method::POST, "/api/tones", Some(tone)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "A record with these details already exists");
    }
}
