// Saved trending posts: posts collected from the feed (usually through the
// browser extension) for later inspiration.

pub mod handlers;
pub mod models;
pub mod repository;
