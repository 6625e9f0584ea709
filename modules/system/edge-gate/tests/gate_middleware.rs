#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end gate behaviour on a router, in both modes.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::get,
};
use edge_gate::{EdgeGate, EdgeGateConfig, EdgeGateMode, install};
use httpmock::prelude::*;
use serde_json::json;
use tower::ServiceExt;

fn site() -> Router {
    Router::new()
        .route("/", get(|| async { "home" }))
        .route("/login", get(|| async { "login" }))
        .route("/admin", get(|| async { "admin" }))
        .route("/admin/{*rest}", get(|| async { "admin" }))
        .route("/administrator", get(|| async { "not gated" }))
}

fn gated(cfg: &EdgeGateConfig) -> Router {
    install(site(), Arc::new(EdgeGate::from_config(cfg).unwrap()))
}

fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn anonymous_admin_request_is_redirected_to_login() {
    let response = gated(&EdgeGateConfig::default())
        .oneshot(get_with_cookie("/admin/dashboard", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn any_cookie_value_is_admitted_in_presence_mode() {
    let response = gated(&EdgeGateConfig::default())
        .oneshot(get_with_cookie(
            "/admin/dashboard",
            Some("folio.session_token=definitely-not-a-real-session"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn public_and_lookalike_paths_pass() {
    for uri in ["/", "/login", "/administrator"] {
        let response = gated(&EdgeGateConfig::default())
            .oneshot(get_with_cookie(uri, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn custom_login_path_is_the_redirect_target() {
    let cfg = EdgeGateConfig {
        login_path: "/sign-in".to_owned(),
        ..EdgeGateConfig::default()
    };
    let response = gated(&cfg)
        .oneshot(get_with_cookie("/admin", None))
        .await
        .unwrap();

    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/sign-in");
}

fn verified(server: &MockServer) -> EdgeGateConfig {
    EdgeGateConfig {
        mode: EdgeGateMode::Verified,
        issuer_url: server.base_url(),
        require_admin_role: true,
        ..EdgeGateConfig::default()
    }
}

fn session_body(role: &str) -> serde_json::Value {
    json!({
        "user": {"id": "owner", "email": "owner@folio.test", "role": role},
        "session": {
            "id": "sess-1",
            "userId": "owner",
            "expiresAt": "2030-01-01T00:00:00Z",
            "createdAt": "2026-01-01T00:00:00Z"
        }
    })
}

#[tokio::test]
async fn verified_mode_admits_live_admin_session() {
    let server = MockServer::start_async().await;
    let lookup = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/auth/get-session")
                .header("cookie", "folio.session_token=live");
            then.status(200).json_body(session_body("ADMIN"));
        })
        .await;

    let response = gated(&verified(&server))
        .oneshot(get_with_cookie("/admin/posts", Some("folio.session_token=live")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    lookup.assert_async().await;
}

#[tokio::test]
async fn verified_mode_redirects_null_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/get-session");
            then.status(200).json_body(serde_json::Value::Null);
        })
        .await;

    let response = gated(&verified(&server))
        .oneshot(get_with_cookie("/admin", Some("folio.session_token=stale")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn verified_mode_redirects_non_admin_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/get-session");
            then.status(200).json_body(session_body("USER"));
        })
        .await;

    let response = gated(&verified(&server))
        .oneshot(get_with_cookie("/admin", Some("folio.session_token=live")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn verified_mode_fails_closed_on_issuer_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/get-session");
            then.status(500).body("boom");
        })
        .await;

    let response = gated(&verified(&server))
        .oneshot(get_with_cookie("/admin", Some("folio.session_token=live")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn verified_mode_fails_closed_on_garbage_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/get-session");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let response = gated(&verified(&server))
        .oneshot(get_with_cookie("/admin", Some("folio.session_token=live")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn verified_mode_fails_closed_on_slow_issuer() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/get-session");
            then.status(200)
                .json_body(session_body("ADMIN"))
                .delay(Duration::from_millis(1500));
        })
        .await;
    let cfg = EdgeGateConfig {
        resolver_timeout_ms: 100,
        ..verified(&server)
    };

    let started = Instant::now();
    let response = gated(&cfg)
        .oneshot(get_with_cookie("/admin", Some("folio.session_token=live")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    assert!(started.elapsed() < Duration::from_millis(1500));
}

#[tokio::test]
async fn verified_mode_checks_presence_before_issuer() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/get-session");
            then.status(200).json_body(session_body("ADMIN"));
        })
        .await;

    let response = gated(&verified(&server))
        .oneshot(get_with_cookie("/admin", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}
