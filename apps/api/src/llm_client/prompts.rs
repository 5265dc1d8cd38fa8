// Shared prompt fragments used by every generation request.
// Task-specific prompt builders live in content/prompts.rs.

use crate::content::models::Language;

/// System prompt for English output.
pub const ENGLISH_SYSTEM: &str = "You are an expert LinkedIn ghostwriter. \
    You write ready-to-publish social media content. \
    Output ONLY the content itself. \
    Do NOT introduce it, do NOT explain it, do NOT add notes about what you did. \
    Do NOT use markdown bold or italics.";

/// System prompt for Kurdish (Sorani) output.
pub const KURDISH_SYSTEM: &str = "You are an expert LinkedIn ghostwriter who writes fluent \
    Sorani Kurdish in Arabic script. \
    You write ready-to-publish social media content. \
    Output ONLY the content itself, entirely in Kurdish. \
    Do NOT introduce it, do NOT explain it, do NOT add notes or translations. \
    Do NOT use markdown bold or italics.";

/// Appended to every user prompt.
pub const NO_COMMENTARY_INSTRUCTION: &str = "\
    CRITICAL: Respond with the final text only. No preface such as \"Here's your post:\", \
    no closing remarks, no character counts, no explanations of your choices.";

pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::English => ENGLISH_SYSTEM,
        Language::Kurdish => KURDISH_SYSTEM,
    }
}

/// Language directive embedded into task prompts.
pub fn language_directive(language: Language) -> &'static str {
    match language {
        Language::English => "Write in clear, natural English.",
        Language::Kurdish => {
            "Write in Sorani Kurdish (Arabic script, right-to-left). \
             Keep technical terms and brand names in their original form."
        }
    }
}
