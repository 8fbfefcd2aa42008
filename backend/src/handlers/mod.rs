pub mod auth;
pub mod authors;
pub mod health;
pub mod lock_events;
pub mod locks;

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::Ack;

const NO_STORE: (header::HeaderName, &str) = (header::CACHE_CONTROL, "no-store");

/// Relays an upstream JSON body without re-serializing it.
pub(crate) fn relay_json(body: String) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json"), NO_STORE],
        body,
    )
        .into_response()
}

pub(crate) fn json_no_store<T: serde::Serialize>(value: T) -> Response {
    ([NO_STORE], Json(value)).into_response()
}

pub(crate) fn ack() -> Response {
    json_no_store(Ack::OK)
}
