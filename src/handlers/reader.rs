use std::sync::Arc;

use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Extension, Form, Json, Router,
};
use validator::Validate;

use crate::{
    models::comments::CommentDto,
    session::{Counter, Session},
    AppState, Error, Result,
};

pub fn reader_handler() -> Router {
    Router::new()
        .route("/reader-homepage", get(reader_homepage))
        .route("/back-to-reader-homepage", get(back_to_reader_homepage))
        .route("/back-to-homepage", get(back_to_homepage))
        .route("/reader-blog/{publish_id}", get(reader_blog))
        .route("/add-comment", post(add_comment))
        .route("/comment-like/{id}", post(comment_like))
        .route("/like-blog/{id}", post(like_blog))
}

/// Sends the reader back where the form was submitted from. Only a path-only
/// Referer or one naming this host is followed; anything else goes to
/// `fallback`.
fn back_to(headers: &HeaderMap, fallback: &str) -> Redirect {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok());

    let target = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| referer.parse::<Uri>().ok())
        .filter(|uri| match uri.authority() {
            Some(authority) => host == Some(authority.as_str()),
            None => uri.scheme().is_none(),
        })
        .and_then(|uri| uri.path_and_query().map(|pq| pq.as_str().to_string()))
        .filter(|path| path.starts_with('/') && !path.starts_with("//"));

    Redirect::to(target.as_deref().unwrap_or(fallback))
}

async fn reader_homepage(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let homepage = app_state.reader_service.homepage().await?;
    Ok((StatusCode::OK, Json(homepage)))
}

async fn back_to_reader_homepage() -> Redirect {
    Redirect::to("/blog/reader-homepage")
}

async fn back_to_homepage() -> Redirect {
    Redirect::to("/")
}

async fn reader_blog(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(publish_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let first_view = session.first_view(publish_id).await;

    let article = match app_state
        .reader_service
        .article(publish_id, first_view)
        .await
    {
        Err(Error::NotFound) => {
            if first_view {
                session.forget(Counter::Read, publish_id).await;
            }
            return Err(Error::NotFound);
        }
        result => result?,
    };

    Ok((StatusCode::OK, Json(article)))
}

async fn add_comment(
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Form(comment): Form<CommentDto>,
) -> Result<impl IntoResponse> {
    let comment = comment.trimmed();
    comment.validate()?;
    let comment = comment.escaped();

    app_state
        .reader_service
        .add_comment(comment.publish_id, &comment.name, &comment.comment)
        .await?;

    let fallback = format!("/blog/reader-blog/{}", comment.publish_id);
    Ok(back_to(&headers, &fallback))
}

async fn comment_like(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<Session>,
    headers: HeaderMap,
    Path(comment_id): Path<i64>,
) -> Result<impl IntoResponse> {
    if session.first_comment_like(comment_id).await {
        if let Err(err) = app_state.reader_service.like_comment(comment_id).await {
            session.forget(Counter::CommentLike, comment_id).await;
            return Err(err);
        }
    } else {
        tracing::debug!(comment_id, session_id = %session.id(), "Comment already liked");
    }

    Ok(back_to(&headers, "/blog/reader-homepage"))
}

async fn like_blog(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(session): Extension<Session>,
    headers: HeaderMap,
    Path(publish_id): Path<i64>,
) -> Result<impl IntoResponse> {
    if session.first_post_like(publish_id).await {
        if let Err(err) = app_state.reader_service.like_post(publish_id).await {
            session.forget(Counter::PostLike, publish_id).await;
            return Err(err);
        }
    } else {
        tracing::debug!(publish_id, session_id = %session.id(), "Post already liked");
    }

    let fallback = format!("/blog/reader-blog/{}", publish_id);
    Ok(back_to(&headers, &fallback))
}
