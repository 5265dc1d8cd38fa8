use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::content::normalizer::to_plain_text;
use crate::errors::AppError;
use crate::extract::{optional_text, required_text};

pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavedPostRow {
    pub id: Uuid,
    pub content: String,
    pub author_name: Option<String>,
    pub post_url: Option<String>,
    pub likes: i64,
    pub comments: i64,
    pub reposts: i64,
    pub notes: Option<String>,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePostRequest {
    pub content: Option<String>,
    pub author_name: Option<String>,
    pub post_url: Option<String>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub reposts: Option<i64>,
    pub notes: Option<String>,
}

/// A validated post, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSavedPost {
    pub content: String,
    pub author_name: Option<String>,
    pub post_url: Option<String>,
    pub likes: i64,
    pub comments: i64,
    pub reposts: i64,
    pub notes: Option<String>,
}

fn engagement(value: Option<i64>, field: &str) -> Result<i64, AppError> {
    match value.unwrap_or(0) {
        n if n < 0 => Err(AppError::Validation(format!(
            "{field} must be zero or greater"
        ))),
        n => Ok(n),
    }
}

impl SavePostRequest {
    pub fn validate(self) -> Result<NewSavedPost, AppError> {
        // Scraped posts may carry markup from the feed.
        let content = self.content.map(|c| to_plain_text(&c));
        let content = required_text(content, "content")?;

        let post_url = optional_text(self.post_url);
        if let Some(url) = &post_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(AppError::Validation(
                    "postUrl must be an http(s) URL".to_string(),
                ));
            }
        }

        Ok(NewSavedPost {
            content,
            author_name: optional_text(self.author_name),
            post_url,
            likes: engagement(self.likes, "likes")?,
            comments: engagement(self.comments, "comments")?,
            reposts: engagement(self.reposts, "reposts")?,
            notes: optional_text(self.notes),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotesRequest {
    /// `null` or blank clears the notes.
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

impl ListQuery {
    pub fn page_size(&self) -> Result<i64, AppError> {
        match self.limit {
            None => Ok(DEFAULT_PAGE_SIZE),
            Some(n) if (1..=MAX_PAGE_SIZE).contains(&n) => Ok(n),
            Some(_) => Err(AppError::Validation(format!(
                "limit must be between 1 and {MAX_PAGE_SIZE}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content: &str) -> SavePostRequest {
        SavePostRequest {
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_engagement_to_zero() {
        let post = request("A trending post").validate().unwrap();
        assert_eq!((post.likes, post.comments, post.reposts), (0, 0, 0));
        assert_eq!(post.post_url, None);
    }

    #[test]
    fn test_content_markup_is_stripped() {
        let post = request("<span>Big <b>news</b></span>").validate().unwrap();
        assert_eq!(post.content, "Big news");
    }

    #[test]
    fn test_blank_content_rejected() {
        let err = request("<p>  </p>").validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: content is required");
    }

    #[test]
    fn test_negative_engagement_rejected() {
        let err = SavePostRequest {
            likes: Some(-1),
            ..request("x")
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: likes must be zero or greater");
    }

    #[test]
    fn test_post_url_must_be_http() {
        let err = SavePostRequest {
            post_url: Some("javascript:alert(1)".to_string()),
            ..request("x")
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let ok = SavePostRequest {
            post_url: Some(" https://www.linkedin.com/feed/update/urn:li:activity:1/ ".to_string()),
            ..request("x")
        }
        .validate()
        .unwrap();
        assert_eq!(
            ok.post_url.as_deref(),
            Some("https://www.linkedin.com/feed/update/urn:li:activity:1/")
        );
    }

    #[test]
    fn test_page_size_bounds() {
        assert_eq!(ListQuery { limit: None }.page_size().unwrap(), DEFAULT_PAGE_SIZE);
        assert_eq!(ListQuery { limit: Some(10) }.page_size().unwrap(), 10);
        assert!(ListQuery { limit: Some(0) }.page_size().is_err());
        assert!(ListQuery { limit: Some(101) }.page_size().is_err());
    }
}
