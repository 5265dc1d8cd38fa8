// Content pipeline: normalize the source post, build a prompt, call the
// model, then clean and shape its output for the caller.

pub mod cleaner;
pub mod formatter;
pub mod handlers;
pub mod hooks;
pub mod models;
pub mod normalizer;
pub mod prompts;
