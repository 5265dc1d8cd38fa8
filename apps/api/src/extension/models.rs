use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::saved_posts::models::{SavePostRequest, SavedPostRow};

/// Messages exchanged between extension components, discriminated by `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtensionMessage {
    SavePost {
        post: SavePostRequest,
    },
    GetStats,
    SyncAnalytics {
        #[serde(default)]
        events: Vec<AnalyticsEvent>,
    },
}

impl ExtensionMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            ExtensionMessage::SavePost { .. } => "SAVE_POST",
            ExtensionMessage::GetStats => "GET_STATS",
            ExtensionMessage::SyncAnalytics { .. } => "SYNC_ANALYTICS",
        }
    }
}

/// One engagement observation recorded by the extension.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub name: String,
    pub post_url: Option<String>,
    pub value: Option<f64>,
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Replies mirror the request `type`.
#[derive(Debug, Serialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ExtensionReply {
    SavePost { post: SavedPostRow },
    GetStats { saved_posts: i64, custom_tones: i64 },
    SyncAnalytics { received: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Deserialize)]
pub struct ExtensionLogRequest {
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub context: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct LogAck {
    pub logged: bool,
}
