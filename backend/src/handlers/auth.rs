use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use super::{ack, json_no_store};
use crate::{
    error::AppError,
    models::auth::{LoginRequest, MeResponse},
    session::{MaybeSession, SessionToken, SESSION_TTL},
    state::AppState,
    upstream::{endpoint, UpstreamRequest, AUTH_API_PREFIX},
    utils::jwt::verify_session_token,
};

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let url = endpoint(
        state.config.auth_service_url.as_deref(),
        "AUTH_SERVICE_URL",
        &format!("{}/auth/login", AUTH_API_PREFIX),
    )?;
    let response = state
        .upstream
        .send(UpstreamRequest::post(url).json(&payload))
        .await?;
    if !response.is_success() {
        tracing::info!(status = response.status.as_u16(), "Login rejected by auth service");
        return Err(response.into_error("Login failed"));
    }

    // Token arrives as plain text; tolerate a JSON-quoted string too.
    let token = SessionToken::parse(response.body.trim().trim_matches('"')).ok_or_else(|| {
        tracing::error!("Auth service returned an empty or malformed token");
        AppError::BadGateway("Login failed".to_string())
    })?;

    let cookie = state.tokens.write(&token, SESSION_TTL);
    Ok(([(SET_COOKIE, cookie)], ack()).into_response())
}

pub async fn logout(State(state): State<AppState>) -> Response {
    ([(SET_COOKIE, state.tokens.clear())], ack()).into_response()
}

pub async fn me(
    State(state): State<AppState>,
    MaybeSession(token): MaybeSession,
) -> Result<Response, AppError> {
    let token = token.ok_or_else(|| AppError::Unauthorized("Unauthenticated".to_string()))?;
    let key = state.public_key.get()?;
    let claims = verify_session_token(token.as_str(), &key).map_err(|err| {
        tracing::debug!(error = %err, "Session token rejected");
        AppError::Unauthorized("Invalid or expired token".to_string())
    })?;
    Ok(json_no_store(MeResponse::from(claims)))
}
