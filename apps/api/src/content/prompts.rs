// Prompt builders for the content pipeline.
// Every builder is a pure string assembly; callers validate input first.

use crate::content::models::{HookStyle, Language, Platform, Tone};
use crate::llm_client::prompts::{language_directive, NO_COMMENTARY_INSTRUCTION};

/// Per-platform writing guidelines embedded into adaptation prompts.
fn platform_guidelines(platform: Platform) -> &'static str {
    match platform {
        Platform::Twitter => {
            "Twitter/X: at most 280 characters in total. One punchy idea, short sentences, \
             no more than two relevant hashtags, no thread numbering."
        }
        Platform::Facebook => {
            "Facebook: conversational and warm, short paragraphs separated by blank lines, \
             end with a question that invites comments. Hashtags are optional."
        }
        Platform::Medium => {
            "Medium: an article-style piece with a clear opening paragraph, a few short \
             sections in plain paragraphs, and a closing takeaway. No hashtags."
        }
        Platform::Instagram => {
            "Instagram: a caption under 2200 characters. Strong first line, short paragraphs, \
             a call to action, then 5 to 10 relevant hashtags on the last line."
        }
    }
}

fn tone_guidelines(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "polished, credible and concise, suitable for industry peers",
        Tone::Casual => "relaxed and conversational, like talking to a colleague over coffee",
        Tone::Friendly => "warm, approachable and encouraging",
        Tone::Inspirational => "uplifting and motivating, built around a lesson or a vision",
        Tone::Informative => "educational and fact-driven, with clear takeaways",
    }
}

fn hook_style_guidelines(style: HookStyle) -> &'static str {
    match style {
        HookStyle::Question => "a question that makes the reader stop and think",
        HookStyle::Statement => "a bold, confident statement or contrarian opinion",
        HookStyle::Story => "the opening line of a short personal story",
        HookStyle::Statistic => "a striking number or statistic",
    }
}

/// How a post should sound: one of the built-in tones or a user-defined one.
#[derive(Debug, Clone)]
pub enum ToneDirective {
    BuiltIn(Tone),
    Custom {
        name: String,
        description: String,
        example_post: Option<String>,
    },
}

impl ToneDirective {
    pub fn label(&self) -> String {
        match self {
            ToneDirective::BuiltIn(tone) => tone.as_str().to_string(),
            ToneDirective::Custom { name, .. } => name.clone(),
        }
    }

    fn render(&self) -> String {
        match self {
            ToneDirective::BuiltIn(tone) => {
                format!("TONE: {} — {}.", tone.as_str(), tone_guidelines(*tone))
            }
            ToneDirective::Custom {
                name,
                description,
                example_post,
            } => {
                let mut out = format!("TONE: {name} — {description}");
                if let Some(example) = example_post.as_deref().filter(|e| !e.trim().is_empty()) {
                    out.push_str(&format!(
                        "\n\nMatch the voice of this example post (do not copy it):\n\"\"\"\n{}\n\"\"\"",
                        example.trim()
                    ));
                }
                out
            }
        }
    }
}

/// Prompt that rewrites an existing post for another platform.
pub fn build_adaptation_prompt(content: &str, language: Language, platform: Platform) -> String {
    format!(
        "Adapt the following LinkedIn post for {platform}.\n\n\
         PLATFORM GUIDELINES:\n{guidelines}\n\n\
         LANGUAGE:\n{language}\n\n\
         Keep the original message, facts and intent. Do not invent new claims.\n\n\
         {no_commentary}\n\n\
         ORIGINAL POST:\n\"\"\"\n{content}\n\"\"\"",
        platform = platform.as_str(),
        guidelines = platform_guidelines(platform),
        language = language_directive(language),
        no_commentary = NO_COMMENTARY_INSTRUCTION,
        content = content.trim(),
    )
}

/// Prompt that asks for up to five opening hooks, one per line.
pub fn build_hook_prompt(content: &str, language: Language, style: Option<HookStyle>) -> String {
    let request = match style {
        Some(style) => format!(
            "Write 5 alternative opening hooks for the post below. Every hook must be {}.",
            hook_style_guidelines(style)
        ),
        None => format!(
            "Write 5 alternative opening hooks for the post below, in this order:\n\
             1. {}\n2. {}\n3. {}\n4. {}\n5. any style you think works best",
            hook_style_guidelines(HookStyle::Question),
            hook_style_guidelines(HookStyle::Statement),
            hook_style_guidelines(HookStyle::Story),
            hook_style_guidelines(HookStyle::Statistic),
        ),
    };

    format!(
        "{request}\n\n\
         FORMAT: one hook per line, each under 150 characters. No numbering, no labels, \
         no quotes, no blank lines between hooks.\n\n\
         LANGUAGE:\n{language}\n\n\
         {no_commentary}\n\n\
         POST:\n\"\"\"\n{content}\n\"\"\"",
        language = language_directive(language),
        no_commentary = NO_COMMENTARY_INSTRUCTION,
        content = content.trim(),
    )
}

/// Prompt that writes a new LinkedIn post about a topic.
pub fn build_post_prompt(topic: &str, language: Language, tone: &ToneDirective) -> String {
    format!(
        "Write a LinkedIn post about the topic below.\n\n\
         {tone}\n\n\
         STRUCTURE: a strong first-line hook, 3 to 5 short paragraphs separated by blank \
         lines, a closing question or call to action, and 3 to 5 relevant hashtags on the \
         final line. Stay under 3000 characters.\n\n\
         LANGUAGE:\n{language}\n\n\
         {no_commentary}\n\n\
         TOPIC:\n{topic}",
        tone = tone.render(),
        language = language_directive(language),
        no_commentary = NO_COMMENTARY_INSTRUCTION,
        topic = topic.trim(),
    )
}
