#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Route-level tests: public reads, admin-only writes, and rejection before
//! the repository is reached.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use content_api::{
    ContentApiConfig, DomainError, InMemoryProjectsRepository, Project, ProjectsRepository,
    Service, register_routes,
};
use folio_auth::{AuthConfig, CredentialSigner, CredentialSubject, CredentialVerifier};
use folio_security::Role;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

/// Repository wrapper counting every call that reaches it.
struct CountingRepo {
    inner: InMemoryProjectsRepository,
    calls: AtomicUsize,
}

impl CountingRepo {
    fn new() -> Self {
        Self {
            inner: InMemoryProjectsRepository::new(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectsRepository for CountingRepo {
    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list().await
    }

    async fn insert(&self, project: Project) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(project).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(id).await
    }
}

fn auth() -> AuthConfig {
    AuthConfig::default().with_secret("content-test-secret")
}

fn app(repo: Arc<CountingRepo>) -> Router {
    let svc = Service::new(&ContentApiConfig::default(), repo);
    register_routes(
        Router::new(),
        Arc::new(svc),
        Arc::new(CredentialVerifier::new(&auth())),
    )
}

fn token(role: Role) -> String {
    CredentialSigner::new(&auth())
        .sign(
            CredentialSubject {
                id: "owner",
                email: "owner@folio.test",
                name: None,
                role,
            },
            chrono::Utc::now().timestamp(),
        )
        .unwrap()
}

fn create_request(bearer: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/projects")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn anonymous_write_is_401_and_never_reaches_repository() {
    let repo = Arc::new(CountingRepo::new());
    let response = app(repo.clone())
        .oneshot(create_request(None, r#"{"title":"Compiler"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, serde_json::json!({"error": "Unauthorized"}));
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn non_admin_write_is_401_and_never_reaches_repository() {
    let repo = Arc::new(CountingRepo::new());
    let user = token(Role::User);

    let create = app(repo.clone())
        .oneshot(create_request(Some(&user), r#"{"title":"Compiler"}"#))
        .await
        .unwrap();
    assert_eq!(create.status(), StatusCode::UNAUTHORIZED);

    let delete = app(repo.clone())
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/projects/{}", Uuid::new_v4()))
                .header(header::AUTHORIZATION, format!("Bearer {user}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn anonymous_caller_with_bad_path_still_gets_401() {
    let repo = Arc::new(CountingRepo::new());
    let response = app(repo.clone())
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/projects/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn tampered_token_is_401() {
    let repo = Arc::new(CountingRepo::new());
    let mut forged = token(Role::Admin);
    forged.push('x');

    let response = app(repo.clone())
        .oneshot(create_request(Some(&forged), r#"{"title":"Compiler"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn admin_can_create_list_and_delete() {
    let repo = Arc::new(CountingRepo::new());
    let router = app(repo.clone());
    let admin = token(Role::Admin);

    let created = router
        .clone()
        .oneshot(create_request(
            Some(&admin),
            r#"{"title":"Compiler","summary":"A toy compiler","url":"https://example.test"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json_body(created).await;
    assert_eq!(created["title"], "Compiler");
    assert_eq!(created["createdBy"], "owner");
    let id = created["id"].as_str().unwrap().to_owned();

    let listed = router
        .clone()
        .oneshot(Request::builder().uri("/api/projects").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(json_body(listed).await.as_array().unwrap().len(), 1);

    let deleted = router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/projects/{id}"))
                .header(header::AUTHORIZATION, format!("Bearer {admin}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let again = router
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/projects/{id}"))
                .header(header::AUTHORIZATION, format!("Bearer {admin}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_blank_title_is_400() {
    let repo = Arc::new(CountingRepo::new());
    let response = app(repo.clone())
        .oneshot(create_request(Some(&token(Role::Admin)), r#"{"title":"  "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Bad Request");
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn listing_is_public() {
    let repo = Arc::new(CountingRepo::new());
    let response = app(repo.clone())
        .oneshot(Request::builder().uri("/api/projects").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));
    assert_eq!(repo.calls(), 1);
}

#[tokio::test]
async fn admin_malformed_body_is_json_400() {
    let repo = Arc::new(CountingRepo::new());
    for body in ["{not json", r#"{"summary":"no title"}"#] {
        let response = app(repo.clone())
            .oneshot(create_request(Some(&token(Role::Admin)), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        let json = json_body(response).await;
        assert_eq!(json["error"], "Bad Request");
        assert!(json["detail"].as_str().unwrap().contains("body"));
    }
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn admin_non_uuid_id_is_json_400() {
    let repo = Arc::new(CountingRepo::new());
    let response = app(repo.clone())
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/projects/not-a-uuid")
                .header(header::AUTHORIZATION, format!("Bearer {}", token(Role::Admin)))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Bad Request");
    assert!(json["detail"].as_str().unwrap().contains("'id'"));
    assert_eq!(repo.calls(), 0);
}
