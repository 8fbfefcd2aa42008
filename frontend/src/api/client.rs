use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::*, config};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// How a 401 from the BFF should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnUnauthorized {
    RedirectToLogin,
    Report,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    fn url(&self, path: &str) -> String {
        let base = self
            .base_url
            .clone()
            .unwrap_or_else(config::api_base_url);
        format!("{}{}", base.trim_end_matches('/'), path)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        let builder = self.client.post(self.url("/auth/login")).json(request);
        self.send(builder, OnUnauthorized::Report)
            .await
            .and_then(|(status, body)| expect_success(status, &body, "Login failed"))
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let builder = self.client.post(self.url("/auth/logout"));
        self.send(builder, OnUnauthorized::Report)
            .await
            .and_then(|(status, body)| expect_success(status, &body, "Logout failed"))
    }

    pub async fn me(&self) -> Result<Me, ApiError> {
        self.get_json(self.client.get(self.url("/auth/me"))).await
    }

    pub async fn list_locks(&self, page: u32, size: u32) -> Result<Page<Lock>, ApiError> {
        let builder = self
            .client
            .get(self.url("/locks"))
            .query(&[("page", page), ("size", size)]);
        self.get_json(builder).await
    }

    pub async fn find_lock(&self, mac: &str) -> Result<Lock, ApiError> {
        let path = format!("/locks/mac/{}", encode_segment(mac));
        self.get_json(self.client.get(self.url(&path))).await
    }

    pub async fn lock(&self, mac: &str) -> Result<(), ApiError> {
        self.command(mac, "lock").await
    }

    pub async fn unlock(&self, mac: &str) -> Result<(), ApiError> {
        self.command(mac, "unlock").await
    }

    async fn command(&self, mac: &str, command: &str) -> Result<(), ApiError> {
        let path = format!("/locks/{}/{}", encode_segment(mac), command);
        let builder = self.client.post(self.url(&path));
        self.send(builder, OnUnauthorized::RedirectToLogin)
            .await
            .and_then(|(status, body)| expect_success(status, &body, "Lock command failed"))
    }

    pub async fn list_lock_events(
        &self,
        page: u32,
        size: u32,
        sort: Option<&str>,
    ) -> Result<Page<LockEvent>, ApiError> {
        let mut query = vec![("page", page.to_string()), ("size", size.to_string())];
        if let Some(sort) = sort {
            query.push(("sort", sort.to_string()));
        }
        let builder = self.client.get(self.url("/lock-events")).query(&query);
        self.get_json(builder).await
    }

    pub async fn list_authors(&self) -> Result<Vec<Author>, ApiError> {
        let builder = self.client.get(self.url("/authors"));
        let (status, body) = self.send(builder, OnUnauthorized::Report).await?;
        decode(status, &body)
    }

    async fn get_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let (status, body) = self.send(builder, OnUnauthorized::RedirectToLogin).await?;
        decode(status, &body)
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        on_unauthorized: OnUnauthorized,
    ) -> Result<(StatusCode, String), ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::unknown(format!("Invalid request: {}", e)))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let (status, body) = self.execute(request).await?;
        if status == StatusCode::UNAUTHORIZED && on_unauthorized == OnUnauthorized::RedirectToLogin
        {
            redirect_to_login();
        }
        if !status.is_success() {
            log::warn!("{} {} failed with status {}", method, path, status.as_u16());
        }
        Ok((status, body))
    }

    #[cfg(not(test))]
    async fn execute(&self, request: reqwest::Request) -> Result<(StatusCode, String), ApiError> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok((status, body))
    }

    #[cfg(test)]
    async fn execute(&self, request: reqwest::Request) -> Result<(StatusCode, String), ApiError> {
        let responder = mock_for(request.url().as_str()).ok_or_else(|| {
            ApiError::request_failed(format!("No mock registered for {}", request.url()))
        })?;
        let response = responder.respond(&request)?;
        let status = StatusCode::from_u16(response.status)
            .map_err(|_| ApiError::unknown("Invalid mock status"))?;
        Ok((status, response.body))
    }
}

fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    if !status.is_success() {
        return Err(error_from_body(status, body, "Request failed"));
    }
    serde_json::from_str(body)
        .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
}

fn expect_success(status: StatusCode, body: &str, fallback: &str) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(error_from_body(status, body, fallback))
    }
}

/// Reads the BFF error envelope, falling back to the raw text or `fallback`.
pub fn error_from_body(status: StatusCode, body: &str, fallback: &str) -> ApiError {
    if let Ok(err) = serde_json::from_str::<ApiError>(body) {
        if !err.error.trim().is_empty() {
            return err;
        }
    }
    let text = body.trim();
    let mut err = ApiError::request_failed(if text.is_empty() { fallback } else { text });
    if status == StatusCode::UNAUTHORIZED {
        err.code = "UNAUTHORIZED".into();
    }
    err
}

/// `/login?next=<current path>` for the page the browser is on.
pub fn login_redirect_url(path_and_query: &str) -> String {
    let next = if path_and_query.is_empty() || path_and_query.starts_with("/login") {
        "/dashboard"
    } else {
        path_and_query
    };
    format!("/login?next={}", crate::utils::query::encode_next(next))
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    if path == "/login" {
        return;
    }
    let search = location.search().unwrap_or_default();
    let _ = location.set_href(&login_redirect_url(&format!("{}{}", path, search)));
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login() {}

#[cfg(test)]
pub use mock_registry::{mock_for, register_mock, MockResponse, TestResponder};
