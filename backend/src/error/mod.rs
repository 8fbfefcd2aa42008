use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required environment value is not set.
    #[error("{0} missing")]
    Configuration(&'static str),
    #[error("upstream responded {status}: {message}")]
    Upstream { status: StatusCode, message: String },
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    BadGateway(String),
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error(transparent)]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn upstream(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Upstream { status, .. } => relayable_status(*status),
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Upstream statuses that are not errors cannot be relayed as failures.
fn relayable_status(status: StatusCode) -> StatusCode {
    if status.is_client_error() || status.is_server_error() {
        status
    } else {
        StatusCode::BAD_GATEWAY
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, code, details) = match self {
            AppError::Configuration(var) => {
                tracing::error!(variable = var, "Required configuration value is missing");
                (format!("{} missing", var), "CONFIGURATION_ERROR", None)
            }
            AppError::Upstream { message, .. } => (message, "UPSTREAM_ERROR", None),
            AppError::Unauthorized(msg) => (msg, "UNAUTHORIZED", None),
            AppError::BadRequest(msg) => (msg, "BAD_REQUEST", None),
            AppError::BadGateway(msg) => (msg, "BAD_GATEWAY", None),
            AppError::Validation(errors) => (
                "Validation failed".to_string(),
                "VALIDATION_ERROR",
                Some(serde_json::json!({ "errors": errors })),
            ),
            AppError::InternalServerError(err) => {
                tracing::error!("Internal server error: {:?}", err);
                (
                    "Internal server error".to_string(),
                    "INTERNAL_SERVER_ERROR",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error,
            code: code.to_string(),
            details,
        });

        let mut response = (status, body).into_response();
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        response
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let code = e.code.as_ref();
                    format!("{}: {}", field, code)
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(
            status = rejection.status().as_u16(),
            reason = %rejection.body_text(),
            "Rejected request body"
        );
        AppError::BadRequest("Request body must be a JSON object".to_string())
    }
}
