use std::sync::Arc;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Extension, Form, Json, Router,
};
use validator::Validate;

use crate::{
    models::{
        posts::{CreateDraftDto, DraftForm, DraftIdDto, PublishIdDto, UpdateDraftDto},
        profile::ProfileDto,
    },
    AppState, Result,
};

pub fn author_handler() -> Router {
    Router::new()
        .route("/author-homepage", get(author_homepage))
        .route("/settings", get(settings))
        .route("/back-to-author-homepage", get(back_to_author_homepage))
        .route("/create-draft", get(create_draft))
        .route("/submit-blog", post(submit_blog))
        .route("/edit-blog/{id}", get(edit_blog))
        .route("/update-blog/{id}", post(update_blog))
        .route("/delete-blog", post(delete_blog))
        .route("/publish-blog", post(publish_blog))
        .route("/delete-publishedblog", post(delete_published_blog))
        .route("/author-blog-setting", post(author_blog_setting))
}

async fn author_homepage(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let dashboard = app_state.author_service.dashboard().await?;
    Ok((StatusCode::OK, Json(dashboard)))
}

async fn settings(Extension(app_state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let dashboard = app_state.author_service.dashboard().await?;
    Ok((StatusCode::OK, Json(dashboard)))
}

async fn back_to_author_homepage() -> Redirect {
    Redirect::to("/blog/author-homepage")
}

async fn create_draft() -> impl IntoResponse {
    Json(DraftForm {
        action: "/blog/submit-blog",
        ..Default::default()
    })
}

async fn submit_blog(
    Extension(app_state): Extension<Arc<AppState>>,
    Form(new_draft): Form<CreateDraftDto>,
) -> Result<impl IntoResponse> {
    let new_draft = new_draft.trimmed();
    new_draft.validate()?;
    let new_draft = new_draft.escaped();

    app_state
        .author_service
        .create_draft(&new_draft.title, &new_draft.content)
        .await?;

    let dashboard = app_state.author_service.dashboard().await?;
    Ok((StatusCode::CREATED, Json(dashboard)))
}

async fn edit_blog(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(draft_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let draft = app_state.author_service.get_draft(draft_id).await?;
    Ok((StatusCode::OK, Json(draft)))
}

async fn update_blog(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(draft_id): Path<i64>,
    Form(update_draft): Form<UpdateDraftDto>,
) -> Result<impl IntoResponse> {
    let update_draft = update_draft.trimmed();
    update_draft.validate()?;
    let update_draft = update_draft.escaped();

    app_state
        .author_service
        .update_draft(draft_id, &update_draft.title, &update_draft.content)
        .await?;

    let dashboard = app_state.author_service.dashboard().await?;
    Ok((StatusCode::OK, Json(dashboard)))
}

async fn delete_blog(
    Extension(app_state): Extension<Arc<AppState>>,
    Form(body): Form<DraftIdDto>,
) -> Result<impl IntoResponse> {
    app_state.author_service.delete_draft(body.blog_id).await?;

    let dashboard = app_state.author_service.dashboard().await?;
    Ok((StatusCode::OK, Json(dashboard)))
}

async fn publish_blog(
    Extension(app_state): Extension<Arc<AppState>>,
    Form(body): Form<DraftIdDto>,
) -> Result<impl IntoResponse> {
    app_state.author_service.publish(body.blog_id).await?;

    let dashboard = app_state.author_service.dashboard().await?;
    Ok((StatusCode::OK, Json(dashboard)))
}

async fn delete_published_blog(
    Extension(app_state): Extension<Arc<AppState>>,
    Form(body): Form<PublishIdDto>,
) -> Result<impl IntoResponse> {
    app_state
        .author_service
        .delete_published(body.publish_id)
        .await?;

    let dashboard = app_state.author_service.dashboard().await?;
    Ok((StatusCode::OK, Json(dashboard)))
}

async fn author_blog_setting(
    Extension(app_state): Extension<Arc<AppState>>,
    Form(profile): Form<ProfileDto>,
) -> Result<impl IntoResponse> {
    let profile = profile.trimmed();
    profile.validate()?;
    let profile = profile.escaped();

    app_state
        .author_service
        .set_profile(&profile.author_name, &profile.author_about)
        .await?;

    let dashboard = app_state.author_service.dashboard().await?;
    Ok((StatusCode::OK, Json(dashboard)))
}
