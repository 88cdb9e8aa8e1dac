use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils::humanize::{calendar_date, time_ago};

use super::{
    comments::Comment,
    posts::{Draft, PublishedPost},
    profile::AuthorProfile,
};

#[derive(Debug, Serialize)]
pub struct DraftView {
    #[serde(flatten)]
    pub draft: Draft,
    #[serde(rename = "createdAgo")]
    pub created_ago: String,
    #[serde(rename = "modifiedAgo")]
    pub modified_ago: String,
}

impl DraftView {
    pub fn new(draft: Draft, now: DateTime<Utc>) -> Self {
        Self {
            created_ago: time_ago(draft.created_at, now),
            modified_ago: time_ago(draft.modified_at, now),
            draft,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PublishedView {
    #[serde(flatten)]
    pub post: PublishedPost,
    #[serde(rename = "createdOn")]
    pub created_on: String,
    #[serde(rename = "publishedOn")]
    pub published_on: String,
    #[serde(rename = "publishedAgo")]
    pub published_ago: String,
    #[serde(rename = "modifiedAgo")]
    pub modified_ago: String,
}

impl PublishedView {
    pub fn new(post: PublishedPost, now: DateTime<Utc>) -> Self {
        Self {
            created_on: calendar_date(post.created_at),
            published_on: calendar_date(post.published_at),
            published_ago: time_ago(post.published_at, now),
            modified_ago: time_ago(post.modified_at, now),
            post,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    #[serde(rename = "commentedOn")]
    pub commented_on: String,
    #[serde(rename = "commentedAgo")]
    pub commented_ago: String,
}

impl CommentView {
    pub fn new(comment: Comment, now: DateTime<Utc>) -> Self {
        Self {
            commented_on: calendar_date(comment.commented_at),
            commented_ago: time_ago(comment.commented_at, now),
            comment,
        }
    }
}

/// Everything the author homepage and settings page show.
#[derive(Debug, Serialize)]
pub struct AuthorDashboard {
    pub drafts: Vec<DraftView>,
    pub published: Vec<PublishedView>,
    pub profile: Option<AuthorProfile>,
}

#[derive(Debug, Serialize)]
pub struct ReaderHomepage {
    pub posts: Vec<PublishedView>,
    pub profile: Option<AuthorProfile>,
}

#[derive(Debug, Serialize)]
pub struct ReaderArticle {
    pub post: PublishedView,
    pub comments: Vec<CommentView>,
    pub profile: Option<AuthorProfile>,
}
