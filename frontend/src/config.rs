//! Runtime configuration for the browser bundle.
//!
//! The API base defaults to `<origin>/api` and may be overridden with
//! `window.__SKILOCK_ENV = { API_BASE_URL: "..." }` before the bundle loads.

use std::sync::OnceLock;

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(target_arch = "wasm32")]
fn from_env_global(window: &web_sys::Window) -> Option<String> {
    let env = js_sys::Reflect::get(window, &"__SKILOCK_ENV".into()).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }
    js_sys::Reflect::get(&env, &"API_BASE_URL".into())
        .ok()
        .and_then(|v| v.as_string())
        .and_then(|v| normalize_base_url(&v))
}

#[cfg(target_arch = "wasm32")]
fn resolve() -> String {
    let Some(window) = web_sys::window() else {
        return DEFAULT_API_BASE_URL.to_string();
    };
    if let Some(url) = from_env_global(&window) {
        return url;
    }
    window
        .location()
        .origin()
        .ok()
        .map(|origin| format!("{}/api", origin.trim_end_matches('/')))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

pub fn api_base_url() -> String {
    API_BASE_URL.get_or_init(resolve).clone()
}
