use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::sanitize::clean;

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone, PartialEq, Eq)]
pub struct AuthorProfile {
    pub author_name: String,
    pub author_about: String,
}

/// Body of `POST /blog/author-blog-setting`.
#[derive(Validate, Debug, Default, Clone, Deserialize)]
pub struct ProfileDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Author name must be between 1 and 100 characters"))]
    pub author_name: String,
    #[serde(default)]
    #[validate(length(max = 5000, message = "About text is too long"))]
    pub author_about: String,
}

impl ProfileDto {
    pub fn trimmed(self) -> Self {
        Self {
            author_name: self.author_name.trim().to_string(),
            author_about: self.author_about.trim().to_string(),
        }
    }

    pub fn escaped(self) -> Self {
        Self {
            author_name: clean(&self.author_name),
            author_about: clean(&self.author_about),
        }
    }
}
