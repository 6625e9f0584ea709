use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub const GET_SESSION_PATH: &str = "/api/auth/get-session";
pub const SIGN_IN_PATH: &str = "/api/auth/sign-in";
pub const SIGN_OUT_PATH: &str = "/api/auth/sign-out";
pub const TOKEN_PATH: &str = "/api/auth/token";

/// Register the issuer's routes on `router`.
///
/// Every route is an exact path; there is no catch-all under `/api/auth`.
pub fn register_routes<S>(router: Router<S>, service: Arc<Service>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .route(
            GET_SESSION_PATH,
            get(handlers::get_session).post(handlers::get_session),
        )
        .route(SIGN_IN_PATH, post(handlers::sign_in))
        .route(SIGN_OUT_PATH, post(handlers::sign_out))
        .route(TOKEN_PATH, get(handlers::issue_token))
        .layer(Extension(service))
}
