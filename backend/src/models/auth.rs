use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::jwt::SessionClaims;

/// Credentials forwarded verbatim to the auth service.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Username is required".into());
        return Err(err);
    }
    Ok(())
}

/// Identity derived from a verified session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: String,
    pub tenant_id: Option<i64>,
    pub role: Option<String>,
    pub exp: i64,
}

impl From<SessionClaims> for MeResponse {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.sub,
            tenant_id: claims.tenant_id,
            role: claims.role,
            exp: claims.exp,
        }
    }
}
