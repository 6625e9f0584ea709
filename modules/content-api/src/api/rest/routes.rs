use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{delete, get},
};
use folio_auth::CredentialVerifier;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Register the content routes on `router`.
///
/// `verifier` backs the admin-only handlers; it is shared by every request.
pub fn register_routes<S>(
    router: Router<S>,
    service: Arc<Service>,
    verifier: Arc<CredentialVerifier>,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .route(
            "/api/projects",
            get(handlers::list_projects).post(handlers::create_project),
        )
        .route("/api/projects/{id}", delete(handlers::delete_project))
        .layer(Extension(service))
        .layer(Extension(verifier))
}
