use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use crate::{
    models::posts::{Draft, PostStatus, PublishedPost},
    Error, Result,
};

use super::SqliteRepo;

#[async_trait]
pub trait PublishedRepository: Sync + Send {
    async fn list_published(&self) -> Result<Vec<PublishedPost>>;
    async fn get_published(&self, publish_id: i64) -> Result<Option<PublishedPost>>;
    /// Moves a draft into `published_posts`; the draft row is gone afterwards.
    async fn publish(&self, draft_id: i64) -> Result<PublishedPost>;
    /// Removes the post together with its comments.
    async fn delete_published(&self, publish_id: i64) -> Result<()>;
    async fn increment_reads(&self, publish_id: i64) -> Result<()>;
    async fn increment_post_likes(&self, publish_id: i64) -> Result<()>;
}

#[async_trait]
impl PublishedRepository for SqliteRepo {
    async fn list_published(&self) -> Result<Vec<PublishedPost>> {
        let posts = sqlx::query_as::<_, PublishedPost>(
            r#"
            SELECT publish_id, title, content, created_at, published_at, modified_at, status, reads, likes
            FROM published_posts
            ORDER BY published_at DESC, publish_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn get_published(&self, publish_id: i64) -> Result<Option<PublishedPost>> {
        let post = sqlx::query_as::<_, PublishedPost>(
            r#"
            SELECT publish_id, title, content, created_at, published_at, modified_at, status, reads, likes
            FROM published_posts
            WHERE publish_id = ?
            "#,
        )
        .bind(publish_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    #[instrument(skip(self))]
    async fn publish(&self, draft_id: i64) -> Result<PublishedPost> {
        // Dropping `tx` on any early return rolls the whole move back.
        let mut tx = self.pool.begin().await?;

        let draft = sqlx::query_as::<_, Draft>(
            r#"
            SELECT id, title, content, status, created_at, modified_at
            FROM drafts
            WHERE id = ?
            "#,
        )
        .bind(draft_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(Error::NotFound)?;

        let post = sqlx::query_as::<_, PublishedPost>(
            r#"
            INSERT INTO published_posts
                (title, content, created_at, published_at, modified_at, status, reads, likes)
            VALUES (?, ?, ?, ?, ?, ?, 0, 0)
            RETURNING publish_id, title, content, created_at, published_at, modified_at, status, reads, likes
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(draft.created_at)
        .bind(Utc::now())
        .bind(draft.modified_at)
        .bind(PostStatus::Published)
        .fetch_one(&mut *tx)
        .await?;

        let deleted = sqlx::query("DELETE FROM drafts WHERE id = ?")
            .bind(draft_id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() != 1 {
            tracing::error!(draft_id, "Draft vanished while publishing");
            return Err(Error::InternalServerError);
        }

        tx.commit().await?;

        tracing::info!(
            draft_id,
            publish_id = post.publish_id,
            status = post.status.to_str(),
            "Draft published"
        );

        Ok(post)
    }

    #[instrument(skip(self))]
    async fn delete_published(&self, publish_id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let comments = sqlx::query("DELETE FROM comments WHERE publish_id = ?")
            .bind(publish_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM published_posts WHERE publish_id = ?")
            .bind(publish_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            publish_id,
            comments_removed = comments.rows_affected(),
            "Published post deleted"
        );

        Ok(())
    }

    async fn increment_reads(&self, publish_id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE published_posts SET reads = reads + 1 WHERE publish_id = ?")
            .bind(publish_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    async fn increment_post_likes(&self, publish_id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE published_posts SET likes = likes + 1 WHERE publish_id = ?")
            .bind(publish_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}
