use anyhow::anyhow;
use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use crate::utils::cookies::{CookieOptions, SameSite};

pub const DEFAULT_PROTECTED_PATHS: &[&str] = &["/dashboard", "/locks", "/lock-events"];

#[derive(Debug, Clone)]
pub struct Config {
    pub lock_service_url: Option<String>,
    pub auth_service_url: Option<String>,
    pub jwt_public_key: Option<String>,
    pub content_api_url: Option<String>,
    pub content_api_token: Option<String>,
    pub production: bool,
    pub cookie_secure: bool,
    pub protected_paths: Vec<String>,
    pub frontend_dist: PathBuf,
    pub bind_addr: SocketAddr,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let production = env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let cookie_secure = match env::var("COOKIE_SECURE") {
            Ok(raw) => parse_bool(&raw)
                .ok_or_else(|| anyhow!("Invalid COOKIE_SECURE value: {}", raw))?,
            Err(_) => production,
        };

        let protected_paths = env::var("PROTECTED_PATHS")
            .map(|raw| parse_protected_paths(&raw))
            .unwrap_or_else(|_| default_protected_paths());

        let frontend_dist = env::var("FRONTEND_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("frontend/dist"));

        let bind_addr_raw = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_addr: SocketAddr = bind_addr_raw
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", bind_addr_raw))?;

        let timeout_raw = env::var("UPSTREAM_TIMEOUT_SECONDS").unwrap_or_else(|_| "10".to_string());
        let timeout_secs: u64 = timeout_raw
            .parse()
            .map_err(|_| anyhow!("Invalid UPSTREAM_TIMEOUT_SECONDS value: {}", timeout_raw))?;

        Ok(Config {
            lock_service_url: optional_url("LOCK_SERVICE_URL"),
            auth_service_url: optional_url("AUTH_SERVICE_URL"),
            jwt_public_key: optional_var("JWT_PUBLIC_KEY"),
            content_api_url: optional_url("CONTENT_API_URL"),
            content_api_token: optional_var("CONTENT_API_TOKEN"),
            production,
            cookie_secure,
            protected_paths,
            frontend_dist,
            bind_addr,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn cookie_options(&self) -> CookieOptions {
        CookieOptions {
            secure: self.cookie_secure,
            same_site: SameSite::Lax,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lock_service_url: None,
            auth_service_url: None,
            jwt_public_key: None,
            content_api_url: None,
            content_api_token: None,
            production: false,
            cookie_secure: false,
            protected_paths: default_protected_paths(),
            frontend_dist: PathBuf::from("frontend/dist"),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            upstream_timeout: Duration::from_secs(10),
        }
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn optional_url(name: &str) -> Option<String> {
    optional_var(name).map(|v| normalize_base_url(&v))
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

pub fn parse_protected_paths(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let p = p.trim_end_matches('/');
            if p.starts_with('/') {
                p.to_string()
            } else {
                format!("/{}", p)
            }
        })
        .collect()
}

fn default_protected_paths() -> Vec<String> {
    DEFAULT_PROTECTED_PATHS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" http://locks.local:8080/ "),
            "http://locks.local:8080"
        );
        assert_eq!(normalize_base_url("http://a//"), "http://a");
    }

    #[test]
    fn parse_protected_paths_normalizes_entries() {
        let paths = parse_protected_paths("dashboard, /locks/ ,,/lock-events");
        assert_eq!(paths, vec!["/dashboard", "/locks", "/lock-events"]);
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn default_config_protects_dashboard_locks_and_events() {
        let config = Config::default();
        assert_eq!(
            config.protected_paths,
            vec!["/dashboard", "/locks", "/lock-events"]
        );
        assert!(!config.cookie_options().secure);
    }
}
