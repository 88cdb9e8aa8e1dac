use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use crate::{
    models::posts::{Draft, PostStatus},
    Result,
};

use super::SqliteRepo;

#[async_trait]
pub trait DraftsRepository: Sync + Send {
    async fn list_drafts(&self) -> Result<Vec<Draft>>;
    async fn get_draft(&self, draft_id: i64) -> Result<Option<Draft>>;
    async fn create_draft(&self, title: &str, content: &str) -> Result<Draft>;
    /// Returns the number of rows touched; zero when the draft does not exist.
    async fn update_draft(&self, draft_id: i64, title: &str, content: &str) -> Result<u64>;
    async fn delete_draft(&self, draft_id: i64) -> Result<()>;
}

#[async_trait]
impl DraftsRepository for SqliteRepo {
    async fn list_drafts(&self) -> Result<Vec<Draft>> {
        let drafts = sqlx::query_as::<_, Draft>(
            r#"
            SELECT id, title, content, status, created_at, modified_at
            FROM drafts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(drafts)
    }

    async fn get_draft(&self, draft_id: i64) -> Result<Option<Draft>> {
        let draft = sqlx::query_as::<_, Draft>(
            r#"
            SELECT id, title, content, status, created_at, modified_at
            FROM drafts
            WHERE id = ?
            "#,
        )
        .bind(draft_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(draft)
    }

    #[instrument(skip(self, content))]
    async fn create_draft(&self, title: &str, content: &str) -> Result<Draft> {
        let now = Utc::now();

        let draft = sqlx::query_as::<_, Draft>(
            r#"
            INSERT INTO drafts (title, content, status, created_at, modified_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, content, status, created_at, modified_at
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(PostStatus::Draft)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(draft_id = draft.id, "Draft created");

        Ok(draft)
    }

    #[instrument(skip(self, title, content))]
    async fn update_draft(&self, draft_id: i64, title: &str, content: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE drafts
            SET title = ?, content = ?, modified_at = ?
            WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(Utc::now())
        .bind(draft_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_draft(&self, draft_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM drafts WHERE id = ?")
            .bind(draft_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory_repo;

    #[tokio::test]
    async fn created_draft_is_listed() {
        let repo = memory_repo().await;

        repo.create_draft("Title", "Body").await.unwrap();
        let drafts = repo.list_drafts().await.unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Title");
        assert_eq!(drafts[0].content, "Body");
        assert_eq!(drafts[0].status, PostStatus::Draft);
        assert_eq!(drafts[0].created_at, drafts[0].modified_at);
    }

    #[tokio::test]
    async fn update_bumps_modified_at() {
        let repo = memory_repo().await;
        let draft = repo.create_draft("Old", "old body").await.unwrap();

        let touched = repo.update_draft(draft.id, "New", "new body").await.unwrap();
        let updated = repo.get_draft(draft.id).await.unwrap().unwrap();

        assert_eq!(touched, 1);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "new body");
        assert_eq!(updated.created_at, draft.created_at);
        assert!(updated.modified_at >= draft.modified_at);
    }

    #[tokio::test]
    async fn update_of_missing_draft_touches_nothing() {
        let repo = memory_repo().await;

        let touched = repo.update_draft(42, "t", "c").await.unwrap();

        assert_eq!(touched, 0);
        assert!(repo.list_drafts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_only_that_draft() {
        let repo = memory_repo().await;
        let first = repo.create_draft("one", "1").await.unwrap();
        let second = repo.create_draft("two", "2").await.unwrap();

        repo.delete_draft(first.id).await.unwrap();

        let drafts = repo.list_drafts().await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].id, second.id);
    }
}
