//! Core value types of the content pipeline. Nothing here is persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

fn invalid_choice(field: &str, value: &str, options: &[&str]) -> String {
    format!(
        "Invalid {field} '{value}'. Must be one of: {}",
        options.join(", ")
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Kurdish,
    #[default]
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Kurdish, Language::English];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Kurdish => "kurdish",
            Language::English => "english",
        }
    }

    /// Text direction for rendering: Sorani Kurdish is written right-to-left.
    pub fn direction(&self) -> TextDirection {
        match self {
            Language::Kurdish => TextDirection::Rtl,
            Language::English => TextDirection::Ltr,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kurdish" | "ku" | "ckb" => Ok(Language::Kurdish),
            "english" | "en" => Ok(Language::English),
            _ => Err(invalid_choice(
                "language",
                s,
                &Language::ALL.map(|l| l.as_str()),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Facebook,
    Medium,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::Medium,
        Platform::Instagram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Medium => "medium",
            Platform::Instagram => "instagram",
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| invalid_choice("platform", s, &Platform::ALL.map(|p| p.as_str())))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Inspirational,
    Informative,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Inspirational,
        Tone::Informative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Inspirational => "inspirational",
            Tone::Informative => "informative",
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| invalid_choice("tone", s, &Tone::ALL.map(|t| t.as_str())))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookStyle {
    Question,
    Statement,
    Story,
    Statistic,
}

impl HookStyle {
    /// Rotation applied to the first four accepted hooks, in order.
    pub const ROTATION: [HookStyle; 4] = [
        HookStyle::Question,
        HookStyle::Statement,
        HookStyle::Story,
        HookStyle::Statistic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HookStyle::Question => "question",
            HookStyle::Statement => "statement",
            HookStyle::Story => "story",
            HookStyle::Statistic => "statistic",
        }
    }
}

impl FromStr for HookStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookStyle::ROTATION
            .into_iter()
            .find(|h| h.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| {
                invalid_choice("hook style", s, &HookStyle::ROTATION.map(|h| h.as_str()))
            })
    }
}

/// A single candidate opening line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedHook {
    pub text: String,
    pub style: HookStyle,
}

/// A post formatted for a target platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedContent {
    pub content: String,
    pub platform: Platform,
    pub language: Language,
    pub direction: TextDirection,
    pub character_count: usize,
    pub original_character_count: usize,
    /// `None` for platforms without a practical ceiling.
    pub character_limit: Option<usize>,
    pub truncated: bool,
}

/// A freshly generated LinkedIn post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    pub content: String,
    pub tone: String,
    pub language: Language,
    pub direction: TextDirection,
    pub character_count: usize,
}
