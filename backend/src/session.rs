//! Session token carried in the `access_token` cookie.
//!
//! The server keeps no session records: the cookie value is an opaque bearer
//! token issued by the auth service and relayed upstream as-is.

use std::{convert::Infallible, fmt, time::Duration};

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderValue},
};

use crate::utils::cookies::{extract_cookie_value, CookieOptions, SetCookie};

pub const SESSION_COOKIE_NAME: &str = "access_token";
pub const SESSION_COOKIE_PATH: &str = "/";
pub const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Accepts a raw token only when it can be stored verbatim in a cookie.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty() && trimmed.bytes().all(is_cookie_octet);
        valid.then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

// RFC 6265 cookie-octet
fn is_cookie_octet(b: u8) -> bool {
    matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}

/// Reads and writes the single session cookie.
#[derive(Debug, Clone, Copy)]
pub struct TokenStore {
    options: CookieOptions,
}

impl TokenStore {
    pub fn new(options: CookieOptions) -> Self {
        Self { options }
    }

    pub fn read(headers: &HeaderMap) -> Option<SessionToken> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|raw| extract_cookie_value(raw, SESSION_COOKIE_NAME))
            .and_then(|value| SessionToken::parse(&value))
    }

    pub fn write(&self, token: &SessionToken, ttl: Duration) -> HeaderValue {
        let cookie = SetCookie {
            name: SESSION_COOKIE_NAME,
            value: token.as_str(),
            path: SESSION_COOKIE_PATH,
            max_age: ttl,
            options: self.options,
        };
        header_value(cookie.render())
    }

    pub fn clear(&self) -> HeaderValue {
        header_value(SetCookie::expired(SESSION_COOKIE_NAME, SESSION_COOKIE_PATH, self.options).render())
    }
}

// Cookie names, attributes and token octets are all visible ASCII.
fn header_value(rendered: String) -> HeaderValue {
    HeaderValue::try_from(rendered).unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Extractor yielding the session token, if the request carries one.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<SessionToken>);

impl<S> FromRequestParts<S> for MaybeSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(TokenStore::read(&parts.headers)))
    }
}
