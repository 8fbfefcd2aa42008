#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use rsa::{
    pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding},
    RsaPrivateKey,
};
use serde_json::Value;
use skilock_backend::{config::Config, create_app, state::AppState};
use std::{path::PathBuf, sync::OnceLock, time::Duration};
use tower::ServiceExt;

pub const SESSION_TOKEN: &str = "opaque-session-token";

/// Configuration pointing every upstream at `upstream_uri`.
pub fn test_config(upstream_uri: &str) -> Config {
    Config {
        lock_service_url: Some(upstream_uri.to_string()),
        auth_service_url: Some(upstream_uri.to_string()),
        jwt_public_key: None,
        content_api_url: Some(upstream_uri.to_string()),
        content_api_token: Some("content-token".to_string()),
        frontend_dist: test_dist_dir(),
        upstream_timeout: Duration::from_secs(5),
        ..Config::default()
    }
}

/// Minimal built UI used by the SPA fallback.
pub fn test_dist_dir() -> PathBuf {
    static DIST: OnceLock<PathBuf> = OnceLock::new();
    DIST.get_or_init(|| {
        let dir = std::env::temp_dir().join(format!("skilock-test-dist-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create dist dir");
        std::fs::write(
            dir.join("index.html"),
            "<!doctype html><html><body>skilock</body></html>",
        )
        .expect("write index.html");
        dir
    })
    .clone()
}

pub fn test_app(config: Config) -> Router {
    create_app(AppState::new(config).expect("app state"))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_session(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, format!("access_token={}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn post_with_session(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, format!("access_token={}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("response")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).expect("json body")
}

pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// RSA key pair used to sign session tokens.
pub struct TestKeys {
    private_pem: String,
    pub public_pem: String,
}

impl TestKeys {
    pub fn generate() -> Self {
        let mut rng = rsa::rand_core::OsRng;
        let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("generate key");
        let private_pem = private_key
            .to_pkcs8_pem(LineEnding::LF)
            .expect("encode private key")
            .to_string();
        let public_pem = private_key
            .to_public_key()
            .to_public_key_pem(LineEnding::LF)
            .expect("encode public key");
        Self {
            private_pem,
            public_pem,
        }
    }

    /// Public key as it usually appears in a one-line env value.
    pub fn escaped_public_pem(&self) -> String {
        self.public_pem.replace('\n', "\\n")
    }

    pub fn sign(&self, claims: &Value) -> String {
        let key = EncodingKey::from_rsa_pem(self.private_pem.as_bytes()).expect("encoding key");
        jsonwebtoken::encode(&Header::new(Algorithm::RS256), claims, &key).expect("sign token")
    }
}
