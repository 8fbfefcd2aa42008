use axum::{
    extract::{Path, Query, State},
    response::Response,
};

use super::{ack, relay_json};
use crate::{
    error::AppError,
    models::pagination::PageParams,
    session::MaybeSession,
    state::AppState,
    upstream::{encode_path_segment, endpoint, UpstreamRequest, LOCK_API_PREFIX},
};

fn lock_service_url(state: &AppState, path: &str) -> Result<String, AppError> {
    endpoint(
        state.config.lock_service_url.as_deref(),
        "LOCK_SERVICE_URL",
        &format!("{}{}", LOCK_API_PREFIX, path),
    )
}

fn mac_segment(mac: &str) -> Result<String, AppError> {
    let mac = mac.trim();
    if mac.is_empty() {
        return Err(AppError::BadRequest("MAC address is required".to_string()));
    }
    Ok(encode_path_segment(mac))
}

pub async fn list_locks(
    State(state): State<AppState>,
    MaybeSession(token): MaybeSession,
    Query(params): Query<PageParams>,
) -> Result<Response, AppError> {
    let query = params.into_query()?;
    let url = lock_service_url(&state, "/locks")?;
    let pairs = query.upstream_pairs();
    let response = state
        .upstream
        .send(
            UpstreamRequest::get(url)
                .query(&pairs)
                .bearer(token.as_ref().map(|t| t.as_str())),
        )
        .await?;
    if !response.is_success() {
        return Err(response.into_error("Failed to load locks"));
    }
    Ok(relay_json(response.body))
}

/// Single lock lookup, mounted at both `/api/locks/find/{mac}` and
/// `/api/locks/mac/{mac}`.
pub async fn find_lock(
    State(state): State<AppState>,
    MaybeSession(token): MaybeSession,
    Path(mac): Path<String>,
) -> Result<Response, AppError> {
    let url = lock_service_url(&state, &format!("/locks/mac/{}", mac_segment(&mac)?))?;
    let response = state
        .upstream
        .send(UpstreamRequest::get(url).bearer(token.as_ref().map(|t| t.as_str())))
        .await?;
    if !response.is_success() {
        return Err(response.into_error("Lock not found"));
    }
    Ok(relay_json(response.body))
}

pub async fn lock(
    State(state): State<AppState>,
    session: MaybeSession,
    Path(mac): Path<String>,
) -> Result<Response, AppError> {
    send_command(&state, session, &mac, "lock").await
}

pub async fn unlock(
    State(state): State<AppState>,
    session: MaybeSession,
    Path(mac): Path<String>,
) -> Result<Response, AppError> {
    send_command(&state, session, &mac, "unlock").await
}

/// Issues the command and returns without waiting for the lock to report
/// its new state.
async fn send_command(
    state: &AppState,
    MaybeSession(token): MaybeSession,
    mac: &str,
    command: &str,
) -> Result<Response, AppError> {
    let url = lock_service_url(state, &format!("/locks/{}/{}", mac_segment(mac)?, command))?;
    let response = state
        .upstream
        .send(UpstreamRequest::post(url).bearer(token.as_ref().map(|t| t.as_str())))
        .await?;
    if !response.is_success() {
        tracing::warn!(
            command,
            mac,
            status = response.status.as_u16(),
            "Lock command rejected"
        );
        return Err(response.into_error("Lock command failed"));
    }
    tracing::info!(command, mac, "Lock command accepted");
    Ok(ack())
}
