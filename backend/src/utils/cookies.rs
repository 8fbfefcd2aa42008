use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    Lax,
    Strict,
    None,
}

impl SameSite {
    fn as_str(self) -> &'static str {
        match self {
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
            SameSite::None => "None",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CookieOptions {
    pub secure: bool,
    pub same_site: SameSite,
}

/// A `Set-Cookie` value. Always HttpOnly.
#[derive(Debug, Clone)]
pub struct SetCookie<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub path: &'a str,
    pub max_age: Duration,
    pub options: CookieOptions,
}

impl<'a> SetCookie<'a> {
    /// Cookie that expires immediately, used to drop a previously issued value.
    pub fn expired(name: &'a str, path: &'a str, options: CookieOptions) -> Self {
        Self {
            name,
            value: "",
            path,
            max_age: Duration::ZERO,
            options,
        }
    }

    pub fn render(&self) -> String {
        let mut cookie = format!(
            "{}={}; Path={}; Max-Age={}; HttpOnly; SameSite={}",
            self.name,
            self.value,
            self.path,
            self.max_age.as_secs(),
            self.options.same_site.as_str()
        );
        if self.options.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Finds `name` in a raw `Cookie` header. Empty values count as absent.
pub fn extract_cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        let value = value.trim();
        (key.trim() == name && !value.is_empty()).then(|| value.to_string())
    })
}
