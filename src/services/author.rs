use chrono::Utc;

use crate::{
    models::{
        posts::{Draft, PublishedPost},
        profile::AuthorProfile,
        views::{AuthorDashboard, DraftView, PublishedView},
    },
    repositories::{
        drafts_repo::DraftsRepository, profile_repo::ProfileRepository,
        published_repo::PublishedRepository, SqliteRepo,
    },
    Error, Result,
};

#[derive(Clone)]
pub struct AuthorService {
    repo: SqliteRepo,
}

impl AuthorService {
    pub fn new(repo: SqliteRepo) -> Self {
        Self { repo }
    }

    pub async fn dashboard(&self) -> Result<AuthorDashboard> {
        let drafts = self.repo.list_drafts().await?;
        let published = self.repo.list_published().await?;
        let profile = self.repo.get_profile().await?;

        let now = Utc::now();

        Ok(AuthorDashboard {
            drafts: drafts.into_iter().map(|d| DraftView::new(d, now)).collect(),
            published: published
                .into_iter()
                .map(|p| PublishedView::new(p, now))
                .collect(),
            profile,
        })
    }

    pub async fn get_draft(&self, draft_id: i64) -> Result<DraftView> {
        let draft = self.repo.get_draft(draft_id).await?.ok_or(Error::NotFound)?;

        Ok(DraftView::new(draft, Utc::now()))
    }

    pub async fn create_draft(&self, title: &str, content: &str) -> Result<Draft> {
        self.repo.create_draft(title, content).await
    }

    pub async fn update_draft(&self, draft_id: i64, title: &str, content: &str) -> Result<()> {
        let touched = self.repo.update_draft(draft_id, title, content).await?;

        if touched == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    pub async fn delete_draft(&self, draft_id: i64) -> Result<()> {
        self.repo.delete_draft(draft_id).await
    }

    pub async fn publish(&self, draft_id: i64) -> Result<PublishedPost> {
        self.repo.publish(draft_id).await
    }

    pub async fn delete_published(&self, publish_id: i64) -> Result<()> {
        self.repo.delete_published(publish_id).await
    }

    pub async fn set_profile(&self, author_name: &str, author_about: &str) -> Result<AuthorProfile> {
        self.repo.set_profile(author_name, author_about).await
    }
}
