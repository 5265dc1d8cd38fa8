// Custom tones: user-defined voices that can replace the built-in tones
// when generating a post.

pub mod handlers;
pub mod models;
pub mod repository;
