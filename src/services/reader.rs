use chrono::Utc;

use crate::{
    models::{
        comments::Comment,
        views::{CommentView, PublishedView, ReaderArticle, ReaderHomepage},
    },
    repositories::{
        comments_repo::CommentsRepository, profile_repo::ProfileRepository,
        published_repo::PublishedRepository, SqliteRepo,
    },
    Error, Result,
};

#[derive(Clone)]
pub struct ReaderService {
    repo: SqliteRepo,
}

impl ReaderService {
    pub fn new(repo: SqliteRepo) -> Self {
        Self { repo }
    }

    pub async fn homepage(&self) -> Result<ReaderHomepage> {
        let posts = self.repo.list_published().await?;
        let profile = self.repo.get_profile().await?;

        let now = Utc::now();

        Ok(ReaderHomepage {
            posts: posts
                .into_iter()
                .map(|p| PublishedView::new(p, now))
                .collect(),
            profile,
        })
    }

    /// Detail page for one post. `count_read` is decided by the caller's
    /// session; when set, the read is recorded before the post is fetched.
    pub async fn article(&self, publish_id: i64, count_read: bool) -> Result<ReaderArticle> {
        if count_read {
            self.repo.increment_reads(publish_id).await?;
        }

        let post = self
            .repo
            .get_published(publish_id)
            .await?
            .ok_or(Error::NotFound)?;
        let comments = self.repo.list_comments(publish_id).await?;
        let profile = self.repo.get_profile().await?;

        let now = Utc::now();

        Ok(ReaderArticle {
            post: PublishedView::new(post, now),
            comments: comments
                .into_iter()
                .map(|c| CommentView::new(c, now))
                .collect(),
            profile,
        })
    }

    pub async fn like_post(&self, publish_id: i64) -> Result<()> {
        self.repo.increment_post_likes(publish_id).await
    }

    pub async fn like_comment(&self, comment_id: i64) -> Result<()> {
        self.repo.increment_comment_likes(comment_id).await
    }

    pub async fn add_comment(&self, publish_id: i64, author_name: &str, text: &str) -> Result<Comment> {
        self.repo.add_comment(publish_id, author_name, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{drafts_repo::DraftsRepository, memory_repo};

    async fn service_with_post() -> (ReaderService, i64) {
        let repo = memory_repo().await;
        let draft = repo.create_draft("Hello", "World").await.unwrap();
        let post = repo.publish(draft.id).await.unwrap();
        (ReaderService::new(repo), post.publish_id)
    }

    #[tokio::test]
    async fn comment_shows_on_article() {
        let (service, publish_id) = service_with_post().await;

        service.add_comment(publish_id, "Alice", "Nice post").await.unwrap();
        let article = service.article(publish_id, false).await.unwrap();

        assert_eq!(article.comments.len(), 1);
        assert_eq!(article.comments[0].comment.author_name, "Alice");
        assert_eq!(article.comments[0].comment.text, "Nice post");
        assert_eq!(article.comments[0].comment.likes, 0);
    }

    #[tokio::test]
    async fn counted_read_is_visible_on_the_page() {
        let (service, publish_id) = service_with_post().await;

        let counted = service.article(publish_id, true).await.unwrap();
        let uncounted = service.article(publish_id, false).await.unwrap();

        assert_eq!(counted.post.post.reads, 1);
        assert_eq!(uncounted.post.post.reads, 1);
    }

    #[tokio::test]
    async fn missing_article_is_not_found() {
        let (service, publish_id) = service_with_post().await;

        assert!(matches!(
            service.article(publish_id + 1, false).await,
            Err(Error::NotFound)
        ));
        assert!(matches!(
            service.article(publish_id + 1, true).await,
            Err(Error::NotFound)
        ));
    }

    #[tokio::test]
    async fn homepage_lists_newest_first() {
        let repo = memory_repo().await;
        let older = repo.create_draft("older", "a").await.unwrap();
        let newer = repo.create_draft("newer", "b").await.unwrap();
        repo.publish(older.id).await.unwrap();
        repo.publish(newer.id).await.unwrap();
        let service = ReaderService::new(repo);

        let homepage = service.homepage().await.unwrap();

        let titles: Vec<_> = homepage.posts.iter().map(|p| p.post.title.as_str()).collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }
}
