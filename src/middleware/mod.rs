use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tower_cookies::Cookie;
use uuid::Uuid;

use crate::session::{SessionStore, SESSION_COOKIE};

/// Attaches a [`crate::session::Session`] to every request. The cookie is only
/// issued when a new session ended up storing something during the request.
pub async fn track_session(
    State(store): State<SessionStore>,
    mut req: Request,
    next: Next,
) -> Response {
    let cookies = CookieJar::from_headers(req.headers());

    let session_id = cookies
        .get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok());

    let (session, resumed) = store.load(session_id).await;
    let id = session.id();

    req.extensions_mut().insert(session);

    let mut response = next.run(req).await;

    if !resumed && store.is_stored(id).await {
        let cookie_duration = time::Duration::seconds(store.max_age().num_seconds());
        let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .max_age(cookie_duration)
            .http_only(true)
            .build();

        match HeaderValue::from_str(&cookie.to_string()) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(err) => tracing::error!("Could not encode session cookie: {:?}", err),
        }
    }

    response
}
