use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LockState {
    Locked,
    Unlocked,
    #[serde(other)]
    Unknown,
}

impl LockState {
    pub const ALL: [LockState; 3] = [LockState::Locked, LockState::Unlocked, LockState::Unknown];

    pub fn as_str(self) -> &'static str {
        match self {
            LockState::Locked => "LOCKED",
            LockState::Unlocked => "UNLOCKED",
            LockState::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LockMode {
    Normal,
    Service,
    Maintenance,
    Disabled,
    /// Any mode this UI does not know about. Treated as non-operable.
    #[serde(other)]
    Unrecognized,
}

impl LockMode {
    pub const ALL: [LockMode; 4] = [
        LockMode::Normal,
        LockMode::Service,
        LockMode::Maintenance,
        LockMode::Disabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LockMode::Normal => "NORMAL",
            LockMode::Service => "SERVICE",
            LockMode::Maintenance => "MAINTENANCE",
            LockMode::Disabled => "DISABLED",
            LockMode::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for LockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lock {
    pub id: i64,
    pub mac_address: String,
    pub state: LockState,
    pub mode: LockMode,
    #[serde(default)]
    pub locker_id: Option<i64>,
    #[serde(default)]
    pub location_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockEvent {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub event_time: Option<String>,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub lock_id: Option<i64>,
    #[serde(default)]
    pub ski_ticket_id: Option<Value>,
}

impl LockEvent {
    pub fn ski_ticket_label(&self) -> Option<String> {
        match self.ski_ticket_id.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// One page of a server-side collection. Page indices are zero-based.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: i64,
    #[serde(default)]
    pub total_pages: i64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    pub user_id: String,
    #[serde(default)]
    pub tenant_id: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Author {
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "VALIDATION_ERROR".into(),
            details: None,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "UNKNOWN".into(),
            details: None,
        }
    }

    pub fn request_failed(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "REQUEST_FAILED".into(),
            details: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error)
    }
}

impl From<ApiError> for String {
    fn from(value: ApiError) -> Self {
        value.error
    }
}
