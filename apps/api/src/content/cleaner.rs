//! Output cleaner: removes the model's commentary about its own output.
//!
//! Patterns are anchored at line start. A pattern ending in a colon strips
//! only the matched prefix, so `Here's a LinkedIn post: Great news!` keeps
//! `Great news!`. A pattern spanning the whole line drops the line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::content::models::Language;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

static ENGLISH_META: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)^(?:sure|certainly|absolutely|of course|okay|ok)[!.,]?\s*(?:$|here(?:'s| is| are)\b[^:\n]*:\s*)",
        r"(?i)^here(?:'s| is| are)\s+(?:a|an|the|your|my|some)\s+[^:\n]{0,80}?\b(?:post|posts|version|adaptation|draft|hooks?|caption|tweet|thread|content|rewrite)\b[^:\n]*:\s*",
        r"(?i)^(?:adapted|rewritten|revised|final)\s+(?:post|version|content|caption|tweet)\s*(?:for\s+\w+\s*)?:\s*",
        r"(?i)^(?:note|translation|caption|tweet)\s*:\s*",
        r"(?i)^(?:this|the above)\s+(?:post|version|adaptation|caption)\s+(?:is|has been|was)\s+(?:adapted|tailored|optimi[sz]ed|written|formatted|designed)\b.*$",
        r"(?i)^(?:i hope|let me know|feel free|would you like|hope this helps)\b.*$",
        r"(?i)^\(?(?:character|word) count\b.*$",
    ])
});

static KURDISH_META: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // "Here is ...:" / "This is the post ...:"
        r"^(?:لێرەدا|ئەمە|ئەمەش)\s+[^:\n]{0,80}?(?:پۆست|دەق|وەشان)[^:\n]*:\s*",
        // "Adapted post:" / "Post:"
        r"^(?:پۆستی\s+گونجێنراو|پۆستی\s+نوێ|پۆست)\s*:\s*",
        // "Note:" / "Translation:"
        r"^(?:تێبینی|وەرگێڕان)\s*:\s*",
        // "I hope ..." / "If you want ..."
        r"^(?:هیوادارم|ئەگەر\s+دەتەوێت)\b.*$",
        r"^(?i:character count)\b.*$",
    ])
});

/// Keywords that, next to an explanatory colon, mark a line as commentary.
/// Also drops genuine content such as "Pro tip: every post needs a hook".
static ENGLISH_COLON_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:post|requirements)\b").unwrap());
static KURDISH_COLON_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:پۆست|مەرج|داواکاری)").unwrap());
/// A colon used as a label separator: followed by whitespace or end of line.
/// URLs (`https://`) don't qualify.
static EXPLANATORY_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r":(?:\s|$)").unwrap());

fn meta_patterns(language: Language) -> &'static [Regex] {
    match language {
        Language::English => &ENGLISH_META,
        Language::Kurdish => &KURDISH_META,
    }
}

fn colon_keyword(language: Language) -> &'static Regex {
    match language {
        Language::English => &ENGLISH_COLON_KEYWORD,
        Language::Kurdish => &KURDISH_COLON_KEYWORD,
    }
}

/// Strips meta-commentary prefixes from a single trimmed line.
/// Returns `None` when nothing of the line survives.
fn strip_meta(line: &str, language: Language) -> Option<String> {
    let mut current = line.trim().to_string();
    for pattern in meta_patterns(language) {
        if pattern.is_match(&current) {
            current = pattern.replace(&current, "").trim().to_string();
        }
        if current.is_empty() {
            return None;
        }
    }
    Some(current)
}

fn is_explanatory(line: &str, language: Language) -> bool {
    EXPLANATORY_COLON.is_match(line) && colon_keyword(language).is_match(line)
}

/// Cleans raw LLM output for the given language.
pub fn clean_output(raw: &str, language: Language) -> String {
    let mut kept: Vec<String> = Vec::new();

    for line in raw.lines().skip_while(|l| l.trim().is_empty()) {
        let unstarred = line.replace('*', "");
        if unstarred.trim().is_empty() {
            if kept.last().is_some_and(|l| !l.is_empty()) {
                kept.push(String::new());
            }
            continue;
        }
        let Some(stripped) = strip_meta(&unstarred, language) else {
            continue;
        };
        if is_explanatory(&stripped, language) {
            continue;
        }
        kept.push(stripped);
    }

    kept.join("\n").trim().to_string()
}
