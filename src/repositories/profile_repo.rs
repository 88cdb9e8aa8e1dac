use async_trait::async_trait;
use tracing::instrument;

use crate::{models::profile::AuthorProfile, Result};

use super::SqliteRepo;

#[async_trait]
pub trait ProfileRepository: Sync + Send {
    async fn get_profile(&self) -> Result<Option<AuthorProfile>>;
    /// Replaces whatever profile row exists with a single new one.
    async fn set_profile(&self, author_name: &str, author_about: &str) -> Result<AuthorProfile>;
}

#[async_trait]
impl ProfileRepository for SqliteRepo {
    async fn get_profile(&self) -> Result<Option<AuthorProfile>> {
        let profile = sqlx::query_as::<_, AuthorProfile>(
            "SELECT author_name, author_about FROM author_profile LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    #[instrument(skip(self, author_about))]
    async fn set_profile(&self, author_name: &str, author_about: &str) -> Result<AuthorProfile> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM author_profile")
            .execute(&mut *tx)
            .await?;

        let profile = sqlx::query_as::<_, AuthorProfile>(
            r#"
            INSERT INTO author_profile (author_name, author_about)
            VALUES (?, ?)
            RETURNING author_name, author_about
            "#,
        )
        .bind(author_name)
        .bind(author_about)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(profile)
    }
}
