//! Router assembly and serving for the three HTTP surfaces.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::get};
use content_api::InMemoryProjectsRepository;
use edge_gate::EdgeGate;
use folio_auth::CredentialVerifier;
use memory_session_plugin::MemorySessionStore;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{AppConfig, ServerConfig};
use crate::site;

/// Session issuer: sign-in ceremony, `get-session` bridge and token minting,
/// backed by the in-memory session store.
#[must_use]
pub fn issuer_router(cfg: &AppConfig) -> Router {
    let store = Arc::new(MemorySessionStore::from_config(&cfg.memory_sessions));
    if cfg.memory_sessions.users.is_empty() {
        tracing::warn!("memory_sessions.users is empty; nobody can sign in");
    }
    let service = session_issuer::Service::new(&cfg.session_issuer, &cfg.auth, store);
    let router = session_issuer::register_routes(Router::new(), Arc::new(service));
    with_common_layers(router, &cfg.server, "session_issuer")
}

/// Resource server: public reads, admin-gated writes.
#[must_use]
pub fn api_router(cfg: &AppConfig) -> Router {
    let verifier = Arc::new(CredentialVerifier::new(&cfg.auth));
    let repo = Arc::new(InMemoryProjectsRepository::new());
    let service = content_api::Service::new(&cfg.content, repo);
    let router = content_api::register_routes(Router::new(), Arc::new(service), verifier);
    with_common_layers(router, &cfg.server, "content_api")
}

/// Site pages behind the edge gate.
///
/// # Errors
///
/// An unusable edge gate configuration.
pub fn site_router(cfg: &AppConfig) -> anyhow::Result<Router> {
    let gate = Arc::new(EdgeGate::from_config(&cfg.edge_gate)?);
    let router = edge_gate::install(site::routes(), gate);
    Ok(with_common_layers(router, &cfg.server, "site"))
}

fn with_common_layers(router: Router, cfg: &ServerConfig, module: &'static str) -> Router {
    router
        .route("/health", get(health))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(cfg.request_timeout_secs),
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(
                move |req: &axum::http::Request<axum::body::Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        module,
                    )
                },
            ),
        )
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Bind `addr` and serve `router` until Ctrl-C.
///
/// # Errors
///
/// Bind or accept failures.
pub async fn serve(name: &'static str, addr: SocketAddr, router: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(server = name, %addr, "HTTP server bound");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            tracing::info!(server = name, "HTTP server shutting down gracefully");
        })
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
