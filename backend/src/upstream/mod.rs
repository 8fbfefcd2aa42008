//! Outbound calls to the lock-management, auth and content services.

pub mod message;

use std::time::Duration;

use axum::http::{header, HeaderValue, Method, StatusCode};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use crate::error::AppError;

pub use message::error_message;

/// Lock-management API root.
pub const LOCK_API_PREFIX: &str = "/api/v1";
/// Auth API root.
pub const AUTH_API_PREFIX: &str = "/api/v1";
/// Content API root.
pub const CONTENT_API_PREFIX: &str = "/api";

/// Characters escaped when a caller-supplied value becomes one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Raw upstream reply. Bodies are kept as text so they can be relayed as-is.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Converts a failed reply into an [`AppError::Upstream`] carrying the
    /// best message found in the body.
    pub fn into_error(self, fallback: &str) -> AppError {
        let message = error_message(&self.body, fallback);
        AppError::upstream(self.status, message)
    }
}

/// One outbound request, built by handlers and executed by [`UpstreamClient`].
#[derive(Debug)]
pub struct UpstreamRequest<'a, B: Serialize = ()> {
    pub method: Method,
    pub url: String,
    pub query: &'a [(&'a str, String)],
    pub json: Option<&'a B>,
    pub bearer: Option<&'a str>,
}

impl<'a> UpstreamRequest<'a> {
    pub fn get(url: String) -> Self {
        Self {
            method: Method::GET,
            url,
            query: &[],
            json: None,
            bearer: None,
        }
    }

    pub fn post(url: String) -> Self {
        Self {
            method: Method::POST,
            ..Self::get(url)
        }
    }
}

impl<'a, B: Serialize> UpstreamRequest<'a, B> {
    pub fn query(mut self, query: &'a [(&'a str, String)]) -> Self {
        self.query = query;
        self
    }

    pub fn bearer(mut self, token: Option<&'a str>) -> Self {
        self.bearer = token;
        self
    }

    pub fn json<T: Serialize>(self, body: &'a T) -> UpstreamRequest<'a, T> {
        UpstreamRequest {
            method: self.method,
            url: self.url,
            query: self.query,
            json: Some(body),
            bearer: self.bearer,
        }
    }
}

/// Joins a configured base URL with an API path, failing with a configuration
/// error naming `var` when the base is unset.
pub fn endpoint(base: Option<&str>, var: &'static str, path: &str) -> Result<String, AppError> {
    let base = base.ok_or(AppError::Configuration(var))?;
    Ok(format!("{}{}", base, path))
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize HTTP client: {}", e))?;
        Ok(Self { http })
    }

    pub async fn send<B: Serialize>(
        &self,
        request: UpstreamRequest<'_, B>,
    ) -> Result<UpstreamResponse, AppError> {
        let mut builder = self
            .http
            .request(request.method.clone(), &request.url)
            .header(header::CACHE_CONTROL, "no-store");
        if !request.query.is_empty() {
            builder = builder.query(request.query);
        }
        if let Some(body) = request.json {
            builder = builder.json(body);
        }
        if let Some(token) = request.bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|err| {
            tracing::error!(
                method = %request.method,
                url = %request.url,
                error = %err,
                "Upstream request failed"
            );
            AppError::BadGateway("Upstream service unavailable".to_string())
        })?;

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.text().await.map_err(|err| {
            tracing::error!(url = %request.url, error = %err, "Failed to read upstream body");
            AppError::BadGateway("Upstream service unavailable".to_string())
        })?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            "Upstream call completed"
        );

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
