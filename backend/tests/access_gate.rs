use axum::http::{header, StatusCode};

#[path = "support/mod.rs"]
mod support;

use support::{body_text, get, get_with_session, send, test_app, test_config};

#[tokio::test]
async fn dashboard_without_cookie_redirects_to_login() {
    let app = test_app(test_config("http://127.0.0.1:9"));

    let response = send(&app, get("/dashboard")).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/login?next=/dashboard");
}

#[tokio::test]
async fn redirect_preserves_sub_path_and_query() {
    let app = test_app(test_config("http://127.0.0.1:9"));

    let response = send(&app, get("/lock-events?page=2")).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/login?next=/lock-events%3Fpage%3D2"
    );

    let nested = send(&app, get("/locks/AA:BB")).await;
    assert_eq!(
        nested.headers()[header::LOCATION],
        "/login?next=/locks/AA:BB"
    );
}

#[tokio::test]
async fn dashboard_with_cookie_passes_through_to_the_ui() {
    let app = test_app(test_config("http://127.0.0.1:9"));

    let response = send(&app, get_with_session("/dashboard", "any-token")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("skilock"));
}

#[tokio::test]
async fn login_and_public_paths_are_never_redirected() {
    let app = test_app(test_config("http://127.0.0.1:9"));

    for uri in ["/login", "/login?next=/locks", "/", "/locksmith"] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
    }
}

#[tokio::test]
async fn configured_prefixes_replace_the_defaults() {
    let mut config = test_config("http://127.0.0.1:9");
    config.protected_paths = vec!["/admin".to_string()];
    let app = test_app(config);

    let admin = send(&app, get("/admin/settings")).await;
    let dashboard = send(&app, get("/dashboard")).await;

    assert_eq!(admin.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(dashboard.status(), StatusCode::OK);
}
