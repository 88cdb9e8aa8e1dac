use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::sanitize::clean;

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Comment {
    pub comment_id: i64,
    pub publish_id: i64,
    pub author_name: String,
    pub text: String,
    pub commented_at: DateTime<Utc>,
    pub likes: i64,
}

/// Body of `POST /blog/add-comment`.
#[derive(Validate, Debug, Clone, Deserialize)]
pub struct CommentDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 5000, message = "Comment must be between 1 and 5000 characters"))]
    pub comment: String,
    pub publish_id: i64,
}

impl CommentDto {
    /// Surrounding whitespace removed; length rules apply to this form.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            comment: self.comment.trim().to_string(),
            publish_id: self.publish_id,
        }
    }

    pub fn escaped(self) -> Self {
        Self {
            name: clean(&self.name),
            comment: clean(&self.comment),
            publish_id: self.publish_id,
        }
    }
}
