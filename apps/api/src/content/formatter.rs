//! Platform formatter: fits cleaned content to a target platform.

use crate::content::models::{AdaptedContent, Language, Platform};
use crate::content::normalizer::char_count;

const ELLIPSIS: char = '…';

/// Formatting constraints for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformRules {
    pub character_limit: Option<usize>,
    /// Twitter reads as a single block; the others keep paragraphs.
    pub keep_paragraphs: bool,
}

pub fn rules_for(platform: Platform) -> PlatformRules {
    match platform {
        Platform::Twitter => PlatformRules {
            character_limit: Some(280),
            keep_paragraphs: false,
        },
        Platform::Instagram => PlatformRules {
            character_limit: Some(2200),
            keep_paragraphs: true,
        },
        Platform::Facebook => PlatformRules {
            character_limit: Some(63_206),
            keep_paragraphs: true,
        },
        Platform::Medium => PlatformRules {
            character_limit: None,
            keep_paragraphs: true,
        },
    }
}

/// Rebuilds paragraph structure: non-empty lines of a paragraph stay on
/// their own lines, paragraphs are separated by exactly one blank line.
fn normalize_paragraphs(text: &str, keep_paragraphs: bool) -> String {
    let separator = if keep_paragraphs { "\n\n" } else { "\n" };
    text.split("\n\n")
        .map(|para| {
            para.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|para| !para.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Cuts `text` to at most `limit` characters, preferring a word boundary,
/// and marks the cut with an ellipsis.
fn truncate_on_word(text: &str, limit: usize) -> String {
    if char_count(text) <= limit {
        return text.to_string();
    }
    let budget = limit.saturating_sub(1);
    let head: String = text.chars().take(budget).collect();
    let cut = match head.rfind(char::is_whitespace) {
        // Keep a word boundary only if it doesn't throw away most of the text.
        Some(idx) if char_count(&head[..idx]) * 2 >= budget => &head[..idx],
        _ => head.as_str(),
    };
    let mut out = cut.trim_end().trim_end_matches(['.', ',', ';', ':', '-']).to_string();
    out.push(ELLIPSIS);
    out
}

/// Applies the platform's constraints to already-cleaned content.
pub fn format_for_platform(
    cleaned: &str,
    platform: Platform,
    language: Language,
    original_character_count: usize,
) -> AdaptedContent {
    let rules = rules_for(platform);
    let shaped = normalize_paragraphs(cleaned, rules.keep_paragraphs);

    let (content, truncated) = match rules.character_limit {
        Some(limit) if char_count(&shaped) > limit => (truncate_on_word(&shaped, limit), true),
        _ => (shaped, false),
    };

    AdaptedContent {
        character_count: char_count(&content),
        content,
        platform,
        language,
        direction: language.direction(),
        original_character_count,
        character_limit: rules.character_limit,
        truncated,
    }
}
