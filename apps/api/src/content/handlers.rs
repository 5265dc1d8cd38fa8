//! Axum route handlers for the content pipeline.
//!
//! Every request body is validated into a typed input before any prompt is
//! built, so a bad request never reaches the LLM.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::content::cleaner::clean_output;
use crate::content::formatter::format_for_platform;
use crate::content::hooks::parse_hooks;
use crate::content::models::{
    AdaptedContent, GeneratedHook, GeneratedPost, HookStyle, Language, Platform, Tone,
};
use crate::content::normalizer::{char_count, to_plain_text};
use crate::content::prompts::{
    build_adaptation_prompt, build_hook_prompt, build_post_prompt, ToneDirective,
};
use crate::errors::AppError;
use crate::extract::{optional_text, required_text, AppJson};
use crate::llm_client::prompts::system_prompt;
use crate::llm_client::{ChatCompletion, ChatMessage, LlmError};
use crate::state::AppState;
use crate::tones::repository::get_tone;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptRequest {
    pub post_content: Option<String>,
    pub target_platform: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HooksRequest {
    pub post_content: Option<String>,
    pub language: Option<String>,
    pub hook_style: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub topic: Option<String>,
    pub tone: Option<String>,
    pub custom_tone_id: Option<Uuid>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HooksResponse {
    pub hooks: Vec<GeneratedHook>,
}

struct AdaptInput {
    content: String,
    platform: Platform,
    language: Language,
}

struct HooksInput {
    content: String,
    language: Language,
    style: Option<HookStyle>,
}

struct GenerateInput {
    topic: String,
    tone: Option<Tone>,
    custom_tone_id: Option<Uuid>,
    language: Language,
}

fn parse_language(raw: Option<String>) -> Result<Language, AppError> {
    match optional_text(raw) {
        Some(l) => l.parse().map_err(AppError::Validation),
        None => Ok(Language::default()),
    }
}

/// Post content arrives as editor HTML; only its plain text counts.
fn required_post_content(raw: Option<String>) -> Result<String, AppError> {
    let plain = to_plain_text(raw.as_deref().unwrap_or_default());
    required_text(Some(plain), "postContent")
}

impl AdaptRequest {
    fn validate(self) -> Result<AdaptInput, AppError> {
        let content = required_post_content(self.post_content)?;
        let platform = required_text(self.target_platform, "targetPlatform")?
            .parse::<Platform>()
            .map_err(AppError::Validation)?;
        let language = parse_language(self.language)?;
        Ok(AdaptInput {
            content,
            platform,
            language,
        })
    }
}

impl HooksRequest {
    fn validate(self) -> Result<HooksInput, AppError> {
        let content = required_post_content(self.post_content)?;
        let language = parse_language(self.language)?;
        let style = optional_text(self.hook_style)
            .map(|s| s.parse::<HookStyle>())
            .transpose()
            .map_err(AppError::Validation)?;
        Ok(HooksInput {
            content,
            language,
            style,
        })
    }
}

impl GenerateRequest {
    fn validate(self) -> Result<GenerateInput, AppError> {
        let topic = required_text(self.topic, "topic")?;
        let tone = optional_text(self.tone)
            .map(|t| t.parse::<Tone>())
            .transpose()
            .map_err(AppError::Validation)?;
        let language = parse_language(self.language)?;
        Ok(GenerateInput {
            topic,
            tone,
            custom_tone_id: self.custom_tone_id,
            language,
        })
    }
}

/// Sends one system + user exchange and returns the raw completion.
async fn complete(
    llm: &dyn ChatCompletion,
    language: Language,
    prompt: String,
) -> Result<String, AppError> {
    let messages = [
        ChatMessage::system(system_prompt(language)),
        ChatMessage::user(prompt),
    ];
    Ok(llm.complete(&messages).await?)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/adapt
///
/// Rewrites a post for another platform and fits it to that platform's limits.
pub async fn handle_adapt(
    State(state): State<AppState>,
    AppJson(request): AppJson<AdaptRequest>,
) -> Result<AppJson<AdaptedContent>, AppError> {
    let input = request.validate()?;
    let original_character_count = char_count(&input.content);

    let prompt = build_adaptation_prompt(&input.content, input.language, input.platform);
    let raw = complete(state.llm.as_ref(), input.language, prompt).await?;

    let cleaned = clean_output(&raw, input.language);
    if cleaned.is_empty() {
        return Err(LlmError::EmptyContent.into());
    }

    let adapted = format_for_platform(
        &cleaned,
        input.platform,
        input.language,
        original_character_count,
    );
    info!(
        "Adapted post for {}: {} -> {} chars (truncated: {})",
        adapted.platform, original_character_count, adapted.character_count, adapted.truncated
    );

    Ok(AppJson(adapted))
}

/// POST /api/hooks
///
/// Returns between one and five candidate opening lines for a post.
pub async fn handle_hooks(
    State(state): State<AppState>,
    AppJson(request): AppJson<HooksRequest>,
) -> Result<AppJson<HooksResponse>, AppError> {
    let input = request.validate()?;

    let prompt = build_hook_prompt(&input.content, input.language, input.style);
    let raw = complete(state.llm.as_ref(), input.language, prompt).await?;

    let hooks = parse_hooks(&raw, input.language);
    info!("Generated {} hooks", hooks.len());

    Ok(AppJson(HooksResponse { hooks }))
}

/// POST /api/generate
///
/// Writes a new post about a topic. A custom tone overrides the built-in one.
pub async fn handle_generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateRequest>,
) -> Result<AppJson<GeneratedPost>, AppError> {
    let input = request.validate()?;

    let tone = match input.custom_tone_id {
        Some(id) => {
            let row = get_tone(&state.db, id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Custom tone {id} not found")))?;
            ToneDirective::Custom {
                name: row.name,
                description: row.description,
                example_post: row.example_post,
            }
        }
        None => ToneDirective::BuiltIn(input.tone.unwrap_or_default()),
    };

    let prompt = build_post_prompt(&input.topic, input.language, &tone);
    let raw = complete(state.llm.as_ref(), input.language, prompt).await?;

    let content = clean_output(&raw, input.language);
    if content.is_empty() {
        return Err(LlmError::EmptyContent.into());
    }

    Ok(AppJson(GeneratedPost {
        character_count: char_count(&content),
        content,
        tone: tone.label(),
        language: input.language,
        direction: input.language.direction(),
    }))
}
