//! Redirects cookie-less requests for protected pages to the login page.
//!
//! Only the presence of the session cookie is checked here; token validity is
//! left to the handlers that read claims.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::{session::TokenStore, state::AppState};

pub const LOGIN_PATH: &str = "/login";

/// Characters escaped in the `next` parameter. `/` stays literal so the
/// target reads as a path.
const NEXT_PARAM: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn is_protected(path: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| {
        path == prefix
            || path
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// `/login?next=<path and query>`
pub fn login_redirect_target(path_and_query: &str) -> String {
    format!(
        "{}?next={}",
        LOGIN_PATH,
        utf8_percent_encode(path_and_query, NEXT_PARAM)
    )
}

pub async fn access_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    if path == LOGIN_PATH || !is_protected(&path, &state.config.protected_paths) {
        return next.run(req).await;
    }
    if TokenStore::read(req.headers()).is_some() {
        return next.run(req).await;
    }

    let original = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or(&path);
    tracing::debug!(path = %path, "Redirecting unauthenticated request to login");
    Redirect::temporary(&login_redirect_target(original)).into_response()
}
