//! Axum route handlers for the browser extension.

use axum::{extract::State, http::StatusCode};
use tracing::{debug, error, info, warn};

use crate::errors::AppError;
use crate::extension::models::{
    ExtensionLogRequest, ExtensionMessage, ExtensionReply, LogAck, LogLevel,
};
use crate::extract::AppJson;
use crate::saved_posts::repository::{count_posts, create_post};
use crate::state::AppState;
use crate::tones::repository::count_tones;

/// POST /api/extension/messages
///
/// Dispatches one typed extension message. `SAVE_POST` answers 201, the rest 200.
pub async fn handle_message(
    State(state): State<AppState>,
    AppJson(message): AppJson<ExtensionMessage>,
) -> Result<(StatusCode, AppJson<ExtensionReply>), AppError> {
    debug!("Extension message {}", message.kind());

    match message {
        ExtensionMessage::SavePost { post } => {
            let post = post.validate()?;
            let row = create_post(&state.db, &post).await?;
            Ok((StatusCode::CREATED, AppJson(ExtensionReply::SavePost { post: row })))
        }
        ExtensionMessage::GetStats => {
            let (saved_posts, custom_tones) =
                tokio::try_join!(count_posts(&state.db), count_tones(&state.db))?;
            Ok((
                StatusCode::OK,
                AppJson(ExtensionReply::GetStats {
                    saved_posts,
                    custom_tones,
                }),
            ))
        }
        ExtensionMessage::SyncAnalytics { events } => {
            for event in &events {
                debug!(
                    event = %event.name,
                    post_url = event.post_url.as_deref().unwrap_or("-"),
                    value = event.value.unwrap_or_default(),
                    recorded_at = ?event.recorded_at,
                    "analytics event"
                );
            }
            info!("Received {} analytics events from extension", events.len());
            Ok((
                StatusCode::OK,
                AppJson(ExtensionReply::SyncAnalytics {
                    received: events.len(),
                }),
            ))
        }
    }
}

/// POST /api/extension/logs
///
/// Re-emits an extension log line through the server's tracing pipeline.
pub async fn handle_log(
    AppJson(request): AppJson<ExtensionLogRequest>,
) -> Result<(StatusCode, AppJson<LogAck>), AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message is required".to_string()));
    }

    let context = request
        .context
        .map(|c| c.to_string())
        .unwrap_or_default();
    let message = request.message.trim();

    match request.level {
        LogLevel::Debug => debug!(source = "extension", %context, "{message}"),
        LogLevel::Info => info!(source = "extension", %context, "{message}"),
        LogLevel::Warn => warn!(source = "extension", %context, "{message}"),
        LogLevel::Error => error!(source = "extension", %context, "{message}"),
    }

    Ok((StatusCode::ACCEPTED, AppJson(LogAck { logged: true })))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use sqlx::PgPool;

    use crate::test_support::{post_json, send, state_with_pool, StubLlm};

    #[tokio::test]
    async fn test_sync_analytics_acknowledges_count() {
        let llm = StubLlm::replying("unused");
        let (status, body) = post_json(
            &llm,
            "/api/extension/messages",
            json!({
                "type": "SYNC_ANALYTICS",
                "events": [
                    {"name": "impression", "postUrl": "https://www.linkedin.com/feed/1"},
                    {"name": "click", "value": 1.0, "recordedAt": "2026-10-01T12:00:00Z"}
                ]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "SYNC_ANALYTICS");
        assert_eq!(body["received"], 2);
    }

    #[tokio::test]
    async fn test_unknown_message_type_is_bad_request() {
        let llm = StubLlm::replying("unused");
        let (status, body) =
            post_json(&llm, "/api/extension/messages", json!({"type": "OPEN_TAB"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_save_post_validates_before_storage() {
        let llm = StubLlm::replying("unused");
        let (status, body) = post_json(
            &llm,
            "/api/extension/messages",
            json!({"type": "SAVE_POST", "post": {"content": "  "}}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "content is required");
    }

    #[tokio::test]
    async fn test_log_is_accepted() {
        let llm = StubLlm::replying("unused");
        let (status, body) = post_json(
            &llm,
            "/api/extension/logs",
            json!({"level": "warn", "message": "content script reloaded", "context": {"tab": 3}}),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["logged"], true);
    }

    #[tokio::test]
    async fn test_log_requires_message_and_known_level() {
        let llm = StubLlm::replying("unused");
        let (status, _) = post_json(
            &llm,
            "/api/extension/logs",
            json!({"level": "info", "message": " "}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(
            &llm,
            "/api/extension/logs",
            json!({"level": "loud", "message": "hi"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_save_post_then_stats(pool: PgPool) {
        let state = state_with_pool(pool, StubLlm::replying("unused"));

        let (status, body) = send(
            state.clone(),
            Method::POST,
            "/api/extension/messages",
            Some(json!({"type": "SAVE_POST", "post": {"content": "<p>Trending</p>", "likes": 40}})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["type"], "SAVE_POST");
        assert_eq!(body["post"]["content"], "Trending");

        let (status, _) = send(
            state.clone(),
            Method::POST,
            "/api/tones",
            Some(json!({"name": "Calm", "description": "steady"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            state,
            Method::POST,
            "/api/extension/messages",
            Some(json!({"type": "GET_STATS"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["savedPosts"], 1);
        assert_eq!(body["customTones"], 1);
    }
}
