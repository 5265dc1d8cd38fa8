//! Content normalizer: turns rich editor output (HTML) into plain text and
//! measures it.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());
static STYLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());
/// Tags that end a visual line in the editor.
static BLOCK_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<\s*(?:br\s*/?|/p|/div|/li|/h[1-6]|/blockquote)\s*>").unwrap());
/// Only spans shaped like a tag; `<3` or `a < b > c` in prose are left alone.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[A-Za-z][A-Za-z0-9-]*(?:\s[^<>]*)?/?>").unwrap());
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\f\u{a0}]+").unwrap());
static NL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Converts HTML post content to plain text. Plain input passes through with
/// only whitespace normalization.
pub fn to_plain_text(html: &str) -> String {
    let mut s = SCRIPT_RE.replace_all(html, " ").into_owned();
    s = STYLE_RE.replace_all(&s, " ").into_owned();
    s = COMMENT_RE.replace_all(&s, "").into_owned();
    s = BLOCK_TAG_RE.replace_all(&s, "\n").into_owned();
    s = TAG_RE.replace_all(&s, "").into_owned();
    s = decode_entities(&s);
    s = s.replace("\r\n", "\n").replace('\r', "\n");
    s = WS_RE.replace_all(&s, " ").into_owned();
    let s = s.lines().map(str::trim).collect::<Vec<_>>().join("\n");
    NL_RE.replace_all(&s, "\n\n").trim().to_string()
}

/// Minimal entity decoding for editor output.
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// Length as the user perceives it: Unicode scalar values, not bytes.
/// Kurdish text is multi-byte in UTF-8, so `str::len` would overcount.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
