use std::time::Instant;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::Request,
    http::{header::CONTENT_LENGTH, StatusCode},
    middleware::Next,
    response::Response,
};

use super::request_id::RequestId;

const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;
const MAX_LOGGED_BODY_BYTES: usize = 2048;

/// Logs every 4xx/5xx response with a preview of its body, then forwards the
/// body unchanged. Bodies over the buffer cap are replaced by an empty body.
pub async fn log_error_responses(req: Request, next: Next) -> Response {
    let record = FailedRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        request_id: req.extensions().get::<RequestId>().map(|id| id.0.clone()),
        started: Instant::now(),
    };

    let response = next.run(req).await;
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    match to_bytes(body, MAX_BUFFERED_BODY_BYTES).await {
        Ok(bytes) => {
            record.log(status, &preview(&bytes));
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => {
            parts.headers.remove(CONTENT_LENGTH);
            record.log(status, &format!("<unreadable body: {}>", err));
            Response::from_parts(parts, Body::empty())
        }
    }
}

struct FailedRequest {
    method: String,
    path: String,
    request_id: Option<String>,
    started: Instant,
}

impl FailedRequest {
    fn log(&self, status: StatusCode, body: &str) {
        let latency_ms = self.started.elapsed().as_millis() as u64;
        let request_id = self.request_id.as_deref().unwrap_or("-");
        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                method = %self.method,
                path = %self.path,
                request_id,
                latency_ms,
                body,
                "Request completed with error status"
            );
        } else {
            tracing::warn!(
                status = status.as_u16(),
                method = %self.method,
                path = %self.path,
                request_id,
                latency_ms,
                body,
                "Request completed with error status"
            );
        }
    }
}

fn preview(bytes: &Bytes) -> String {
    if bytes.len() <= MAX_LOGGED_BODY_BYTES {
        return String::from_utf8_lossy(bytes).into_owned();
    }
    format!(
        "{}... (truncated, {} bytes total)",
        String::from_utf8_lossy(&bytes[..MAX_LOGGED_BODY_BYTES]),
        bytes.len()
    )
}
