use axum::{
    extract::{Query, State},
    response::Response,
};

use super::relay_json;
use crate::{
    error::AppError,
    models::pagination::PageParams,
    session::MaybeSession,
    state::AppState,
    upstream::{endpoint, UpstreamRequest, LOCK_API_PREFIX},
};

pub async fn list_lock_events(
    State(state): State<AppState>,
    MaybeSession(token): MaybeSession,
    Query(params): Query<PageParams>,
) -> Result<Response, AppError> {
    let query = params.into_query()?;
    let url = endpoint(
        state.config.lock_service_url.as_deref(),
        "LOCK_SERVICE_URL",
        &format!("{}/lock-events", LOCK_API_PREFIX),
    )?;
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
        return Err(response.into_error("Failed to load lock events"));
    }
    Ok(relay_json(response.body))
}
