use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{optional_text, required_text};

const MAX_NAME_CHARS: usize = 80;
const MAX_DESCRIPTION_CHARS: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CustomToneRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub example_post: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of both `POST /api/tones` and `PUT /api/tones/:id`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub example_post: Option<String>,
}

/// A validated tone definition, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneInput {
    pub name: String,
    pub description: String,
    pub example_post: Option<String>,
}

impl ToneRequest {
    pub fn validate(self) -> Result<ToneInput, AppError> {
        let name = required_text(self.name, "name")?;
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(AppError::Validation(format!(
                "name must be at most {MAX_NAME_CHARS} characters"
            )));
        }
        let description = required_text(self.description, "description")?;
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(AppError::Validation(format!(
                "description must be at most {MAX_DESCRIPTION_CHARS} characters"
            )));
        }
        Ok(ToneInput {
            name,
            description,
            example_post: optional_text(self.example_post),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tone_is_trimmed() {
        let input = ToneRequest {
            name: Some("  Dry wit ".to_string()),
            description: Some(" understated ".to_string()),
            example_post: Some("   ".to_string()),
        }
        .validate()
        .unwrap();
        assert_eq!(input.name, "Dry wit");
        assert_eq!(input.description, "understated");
        assert_eq!(input.example_post, None);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let err = ToneRequest::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: name is required");

        let err = ToneRequest {
            name: Some("x".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: description is required");
    }

    #[test]
    fn test_overlong_name_rejected() {
        let err = ToneRequest {
            name: Some("n".repeat(81)),
            description: Some("d".to_string()),
            example_post: None,
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_row_serializes_camel_case() {
        let now = Utc::now();
        let row = CustomToneRow {
            id: Uuid::new_v4(),
            name: "n".to_string(),
            description: "d".to_string(),
            example_post: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("examplePost").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
