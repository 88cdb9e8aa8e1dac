use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::sanitize::clean;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn to_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Draft {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct PublishedPost {
    pub publish_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub status: PostStatus,
    pub reads: i64,
    pub likes: i64,
}

/// Body of `POST /blog/submit-blog`.
#[derive(Validate, Debug, Default, Clone, Deserialize)]
pub struct CreateDraftDto {
    #[serde(rename = "blogTitle", default)]
    #[validate(length(min = 1, max = 300, message = "Title must be between 1 and 300 characters"))]
    pub title: String,
    #[serde(rename = "blogBody", default)]
    #[validate(length(max = 100000, message = "Content is too long"))]
    pub content: String,
}

impl CreateDraftDto {
    /// Surrounding whitespace removed; length rules apply to this form.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }

    pub fn escaped(self) -> Self {
        Self {
            title: clean(&self.title),
            content: clean(&self.content),
        }
    }
}

/// Body of `POST /blog/update-blog/{id}`.
#[derive(Validate, Debug, Default, Clone, Deserialize)]
pub struct UpdateDraftDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 300, message = "Title must be between 1 and 300 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 100000, message = "Content is too long"))]
    pub content: String,
}

impl UpdateDraftDto {
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }

    pub fn escaped(self) -> Self {
        Self {
            title: clean(&self.title),
            content: clean(&self.content),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DraftIdDto {
    pub blog_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct PublishIdDto {
    pub publish_id: i64,
}

/// Empty form model served by `GET /blog/create-draft`.
#[derive(Debug, Default, Serialize)]
pub struct DraftForm {
    #[serde(rename = "blogTitle")]
    pub title: String,
    #[serde(rename = "blogBody")]
    pub content: String,
    pub action: &'static str,
}
