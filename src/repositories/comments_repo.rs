use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use crate::{models::comments::Comment, Error, Result};

use super::SqliteRepo;

#[async_trait]
pub trait CommentsRepository: Sync + Send {
    async fn list_comments(&self, publish_id: i64) -> Result<Vec<Comment>>;
    async fn add_comment(&self, publish_id: i64, author_name: &str, text: &str) -> Result<Comment>;
    async fn increment_comment_likes(&self, comment_id: i64) -> Result<()>;
}

#[async_trait]
impl CommentsRepository for SqliteRepo {
    async fn list_comments(&self, publish_id: i64) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT comment_id, publish_id, author_name, text, commented_at, likes
            FROM comments
            WHERE publish_id = ?
            ORDER BY commented_at DESC, comment_id DESC
            "#,
        )
        .bind(publish_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    #[instrument(skip(self, text))]
    async fn add_comment(&self, publish_id: i64, author_name: &str, text: &str) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (publish_id, author_name, text, commented_at, likes)
            VALUES (?, ?, ?, ?, 0)
            RETURNING comment_id, publish_id, author_name, text, commented_at, likes
            "#,
        )
        .bind(publish_id)
        .bind(author_name)
        .bind(text)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            let missing_post = err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_foreign_key_violation());

            if missing_post {
                tracing::warn!(publish_id, "Comment on a post that does not exist");
                Error::NotFound
            } else {
                Error::from(err)
            }
        })?;

        Ok(comment)
    }

    async fn increment_comment_likes(&self, comment_id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE comments SET likes = likes + 1 WHERE comment_id = ?")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{
        drafts_repo::DraftsRepository, memory_repo, published_repo::PublishedRepository,
    };

    async fn published_post(repo: &SqliteRepo) -> i64 {
        let draft = repo.create_draft("post", "body").await.unwrap();
        repo.publish(draft.id).await.unwrap().publish_id
    }

    #[tokio::test]
    async fn new_comment_starts_without_likes() {
        let repo = memory_repo().await;
        let publish_id = published_post(&repo).await;

        let comment = repo.add_comment(publish_id, "Alice", "Nice post").await.unwrap();

        assert_eq!(comment.author_name, "Alice");
        assert_eq!(comment.text, "Nice post");
        assert_eq!(comment.likes, 0);
        assert_eq!(comment.publish_id, publish_id);
    }

    #[tokio::test]
    async fn comments_are_newest_first() {
        let repo = memory_repo().await;
        let publish_id = published_post(&repo).await;

        repo.add_comment(publish_id, "Alice", "first").await.unwrap();
        repo.add_comment(publish_id, "Bob", "second").await.unwrap();

        let comments = repo.list_comments(publish_id).await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "second");
        assert_eq!(comments[1].text, "first");
    }

    #[tokio::test]
    async fn comment_on_missing_post_is_not_found() {
        let repo = memory_repo().await;

        let result = repo.add_comment(99, "Alice", "hello?").await;

        assert!(matches!(result, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn comment_likes_increment() {
        let repo = memory_repo().await;
        let publish_id = published_post(&repo).await;
        let comment = repo.add_comment(publish_id, "Alice", "Nice post").await.unwrap();

        repo.increment_comment_likes(comment.comment_id).await.unwrap();

        let comments = repo.list_comments(publish_id).await.unwrap();
        assert_eq!(comments[0].likes, 1);
        assert!(matches!(
            repo.increment_comment_likes(comment.comment_id + 1).await,
            Err(Error::NotFound)
        ));
    }
}
