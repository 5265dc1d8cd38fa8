use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "hookline-api"
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::test_support::{send, test_state, StubLlm};

    #[tokio::test]
    async fn test_health_reports_ok() {
        let llm = StubLlm::replying("unused");
        let (status, body) = send(test_state(llm.clone()), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "hookline-api");
        assert_eq!(llm.calls(), 0);
    }
}
