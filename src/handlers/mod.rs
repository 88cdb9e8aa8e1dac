use axum::{response::IntoResponse, routing::get, Json, Router};

use crate::models::response::{HomeResponse, Response};

pub mod author;
pub mod reader;

pub fn home_handler() -> Router {
    Router::new().route("/", get(home))
}

async fn home() -> impl IntoResponse {
    Json(HomeResponse {
        response: Response {
            status: "success",
            message: "Welcome to the blog".to_string(),
        },
        author_homepage: "/blog/author-homepage",
        reader_homepage: "/blog/reader-homepage",
    })
}
