use axum::http::StatusCode;
use serde_json::json;

#[path = "support/mod.rs"]
mod support;

use support::{body_json, get, get_with_session, now_secs, send, test_app, test_config, TestKeys};

fn app_with_key(public_pem: Option<String>) -> axum::Router {
    let mut config = test_config("http://127.0.0.1:9");
    config.jwt_public_key = public_pem;
    test_app(config)
}

#[tokio::test]
async fn valid_token_returns_claims() {
    let keys = TestKeys::generate();
    let exp = now_secs() + 600;
    let token = keys.sign(&json!({ "sub": "42", "tenantId": 3, "role": "ADMIN", "exp": exp }));
    let app = app_with_key(Some(keys.escaped_public_pem()));

    let response = send(&app, get_with_session("/api/auth/me", &token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "userId": "42", "tenantId": 3, "role": "ADMIN", "exp": exp })
    );
}

#[tokio::test]
async fn optional_claims_are_null_when_absent() {
    let keys = TestKeys::generate();
    let token = keys.sign(&json!({ "sub": "7", "exp": now_secs() + 600 }));
    let app = app_with_key(Some(keys.public_pem.clone()));

    let body = body_json(send(&app, get_with_session("/api/auth/me", &token)).await).await;

    assert_eq!(body["userId"], "7");
    assert!(body["tenantId"].is_null());
    assert!(body["role"].is_null());
}

#[tokio::test]
async fn expired_token_is_indistinguishable_from_missing_cookie() {
    let keys = TestKeys::generate();
    let token = keys.sign(&json!({ "sub": "42", "exp": now_secs() - 60 }));
    let app = app_with_key(Some(keys.escaped_public_pem()));

    let expired = send(&app, get_with_session("/api/auth/me", &token)).await;
    let missing = send(&app, get("/api/auth/me")).await;

    assert_eq!(expired.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    let expired = body_json(expired).await;
    let missing = body_json(missing).await;
    assert_eq!(expired["code"], "UNAUTHORIZED");
    assert_eq!(expired["code"], missing["code"]);
}

#[tokio::test]
async fn token_signed_with_another_key_is_rejected() {
    let trusted = TestKeys::generate();
    let attacker = TestKeys::generate();
    let token = attacker.sign(&json!({ "sub": "42", "exp": now_secs() + 600 }));
    let app = app_with_key(Some(trusted.escaped_public_pem()));

    let response = send(&app, get_with_session("/api/auth/me", &token)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let keys = TestKeys::generate();
    let app = app_with_key(Some(keys.escaped_public_pem()));

    let response = send(&app, get_with_session("/api/auth/me", "not-a-jwt")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_public_key_is_a_configuration_error() {
    let app = app_with_key(None);

    let response = send(&app, get_with_session("/api/auth/me", "anything")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "JWT_PUBLIC_KEY missing");
}
