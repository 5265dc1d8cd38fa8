//! Hook parser: splits hook-generation output into candidate hooks.
//!
//! Each accepted line is classified by content, then the first four are
//! re-labelled by position (question, statement, story, statistic) so the
//! UI always shows one of each. Only a fifth hook keeps its content-based
//! style.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::content::models::{GeneratedHook, HookStyle, Language};

pub const MAX_HOOKS: usize = 5;

/// Numbering, bullets and bold markers the model puts in front of hooks.
static LIST_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\*\*)?(?:\d+[.)]|[-•*])\s+").unwrap());
static ENGLISH_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:question|statement|story|statistic|bold statement)(?:\s+hook)?\s*[:\-–]\s*")
        .unwrap()
});
static KURDISH_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:پرسیار|ڕاگەیاندن|چیرۆک|ئامار)\s*[:\-–]\s*").unwrap());

/// Commentary lines: an intro ending in a colon, a bare acknowledgement, or a
/// sign-off. "Here's what nobody tells you" and "Sure, AI writes code" are hooks.
static ENGLISH_META_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(?:(?:sure|certainly|absolutely|of course|okay|ok)[!.,]?\s+)?(?:here(?:'s| is| are)\b|hooks?\b)[^:\n]*:\s*$|(?:sure|certainly|absolutely|of course|okay|ok)[!.,]?\s*$|note\s*:|(?:i hope|let me know|feel free|hope this helps)\b)",
    )
    .unwrap()
});
static KURDISH_META_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:لێرەدا|ئەمانە|ئەمەش|هووک)[^:\n]*:\s*$|تێبینی\s*:|هیوادارم)").unwrap()
});

static ENGLISH_QUESTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:what|why|how|where|who|which|do|does|did|is|are|can|could|would|should|have|has|will|ever)\b",
    )
    .unwrap()
});
static KURDISH_QUESTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:ئایا|چۆن|بۆچی|کەی|کێ|چی|کام|چەند|لەکوێ|لە\s+کوێ)\b").unwrap());

/// Any percentage, or a leading number followed by a quantity keyword.
static ENGLISH_STATISTIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:\d+(?:[.,]\d+)?\s*(?:%|percent\b)|^\d[\d,.]*\s*(?:x\b|times\b|out of\b|in\s+\d+\b|million\b|billion\b|thousand\b|k\b|people\b|companies\b|teams\b|users\b|of\b))",
    )
    .unwrap()
});
static KURDISH_STATISTIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\d+(?:[.,٫]\d+)?\s*[%٪]|^\d[\d,.٫]*\s*(?:لە|ملیۆن|هەزار|کەس|جار|تیم))").unwrap()
});

static ENGLISH_STORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:once\b|when\b|yesterday\b|last\s+(?:week|month|year|night|summer|winter)\b|back in\b|one day\b|this morning\b|i (?:still )?remember\b|in\s+(?:19|20)\d{2}\b|(?:\w+\s+)?(?:years?|months?|weeks?|days?) ago\b)",
    )
    .unwrap()
});
static KURDISH_STORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(?:کاتێک|جارێک|ڕۆژێک|دوێنێ|ساڵی|پار)\b|پێش\s+\S+\s+ساڵ)").unwrap());

struct HookRules {
    label: &'static Regex,
    meta: &'static Regex,
    question: &'static Regex,
    statistic: &'static Regex,
    story: &'static Regex,
}

fn rules(language: Language) -> HookRules {
    match language {
        Language::English => HookRules {
            label: &ENGLISH_LABEL_RE,
            meta: &ENGLISH_META_RE,
            question: &ENGLISH_QUESTION_RE,
            statistic: &ENGLISH_STATISTIC_RE,
            story: &ENGLISH_STORY_RE,
        },
        Language::Kurdish => HookRules {
            label: &KURDISH_LABEL_RE,
            meta: &KURDISH_META_RE,
            question: &KURDISH_QUESTION_RE,
            statistic: &KURDISH_STATISTIC_RE,
            story: &KURDISH_STORY_RE,
        },
    }
}

/// Removes list markers, style labels, stray bold markers and wrapping quotes.
fn tidy_line(line: &str, rules: &HookRules) -> String {
    let line = LIST_MARKER_RE.replace(line.trim(), "");
    let line = line.replace("**", "");
    let line = rules.label.replace(line.trim(), "");
    line.trim()
        .trim_matches(|c| matches!(c, '"' | '“' | '”' | '«' | '»'))
        .trim()
        .to_string()
}

/// Content-based classification, in priority order.
fn classify(text: &str, rules: &HookRules) -> HookStyle {
    if text.contains('?') || text.contains('؟') || rules.question.is_match(text) {
        HookStyle::Question
    } else if rules.statistic.is_match(text) {
        HookStyle::Statistic
    } else if rules.story.is_match(text) {
        HookStyle::Story
    } else {
        HookStyle::Statement
    }
}

/// Parses raw hook output into 1..=5 hooks.
pub fn parse_hooks(raw: &str, language: Language) -> Vec<GeneratedHook> {
    let rules = rules(language);
    let mut hooks: Vec<GeneratedHook> = Vec::with_capacity(MAX_HOOKS);

    for line in raw.lines() {
        if hooks.len() >= MAX_HOOKS {
            break;
        }
        let text = tidy_line(line, &rules);
        if text.is_empty() || rules.meta.is_match(&text) {
            continue;
        }

        let detected = classify(&text, &rules);
        // Position wins over content for the first four slots.
        let style = HookStyle::ROTATION
            .get(hooks.len())
            .copied()
            .unwrap_or(detected);

        hooks.push(GeneratedHook { text, style });
    }

    if hooks.is_empty() {
        hooks.push(GeneratedHook {
            text: raw.trim().to_string(),
            style: HookStyle::Statement,
        });
    }

    hooks
}
