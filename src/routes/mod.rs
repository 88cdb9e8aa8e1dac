use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Extension, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{author::author_handler, home_handler, reader::reader_handler},
    middleware::track_session,
    AppState,
};

pub fn create_routes(app_state: Arc<AppState>) -> Router {
    let blog_routes = Router::new()
        .merge(author_handler())
        .merge(reader_handler())
        .layer(from_fn_with_state(
            app_state.sessions.clone(),
            track_session,
        ));

    Router::new()
        .merge(home_handler())
        .nest("/blog", blog_routes)
        .fallback_service(ServeDir::new(&app_state.config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}
