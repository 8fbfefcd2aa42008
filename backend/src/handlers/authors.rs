use anyhow::anyhow;
use axum::{extract::State, response::Response};
use serde_json::Value;

use super::json_no_store;
use crate::{
    error::AppError,
    models::author::authors_from_payload,
    state::AppState,
    upstream::{endpoint, UpstreamRequest, CONTENT_API_PREFIX},
};

const FETCH_FAILED: &str = "Failed to fetch authors";

pub async fn list_authors(State(state): State<AppState>) -> Result<Response, AppError> {
    let url = endpoint(
        state.config.content_api_url.as_deref(),
        "CONTENT_API_URL",
        &format!("{}/authors", CONTENT_API_PREFIX),
    )?;
    let token = state
        .config
        .content_api_token
        .as_deref()
        .ok_or(AppError::Configuration("CONTENT_API_TOKEN"))?;

    let query = [
        ("sort", "name:asc".to_string()),
        ("pagination[pageSize]", "100".to_string()),
    ];
    let response = state
        .upstream
        .send(UpstreamRequest::get(url).query(&query).bearer(Some(token)))
        .await
        .map_err(|err| match err {
            AppError::BadGateway(_) => AppError::BadGateway(FETCH_FAILED.to_string()),
            other => other,
        })?;

    if !response.is_success() {
        tracing::error!(
            status = response.status.as_u16(),
            "Content service rejected authors request"
        );
        return Err(AppError::BadGateway(FETCH_FAILED.to_string()));
    }

    let payload: Value = serde_json::from_str(&response.body)
        .map_err(|e| anyhow!("Invalid data format from content service: {}", e))?;
    let authors = authors_from_payload(&payload)
        .ok_or_else(|| anyhow!("Invalid data format: authors payload has no data array"))?;
    Ok(json_no_store(authors))
}
