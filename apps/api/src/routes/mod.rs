pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::content::handlers as content;
use crate::drafts::handlers as drafts;
use crate::extension::handlers as extension;
use crate::saved_posts::handlers as saved_posts;
use crate::state::AppState;
use crate::tones::handlers as tones;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content pipeline
        .route("/api/generate", post(content::handle_generate))
        .route("/api/adapt", post(content::handle_adapt))
        .route("/api/hooks", post(content::handle_hooks))
        // Custom tones
        .route(
            "/api/tones",
            get(tones::handle_list_tones).post(tones::handle_create_tone),
        )
        .route(
            "/api/tones/:id",
            get(tones::handle_get_tone)
                .put(tones::handle_update_tone)
                .delete(tones::handle_delete_tone),
        )
        // Saved trending posts
        .route(
            "/api/saved-posts",
            get(saved_posts::handle_list_posts).post(saved_posts::handle_create_post),
        )
        .route(
            "/api/saved-posts/:id",
            get(saved_posts::handle_get_post)
                .patch(saved_posts::handle_update_notes)
                .delete(saved_posts::handle_delete_post),
        )
        // Browser extension
        .route("/api/extension/messages", post(extension::handle_message))
        .route("/api/extension/logs", post(extension::handle_log))
        // Drafts
        .route("/api/drafts/:session", get(drafts::handle_list_drafts))
        .route(
            "/api/drafts/:session/:key",
            put(drafts::handle_put_draft).delete(drafts::handle_delete_draft),
        )
        .with_state(state)
}
