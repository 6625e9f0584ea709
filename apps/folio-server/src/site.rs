//! Placeholder site pages. Rendering is out of scope; these exist so the edge
//! gate has a real router to guard.

use axum::{Router, response::Html, routing::get};

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/admin", get(admin))
        .route("/admin/{*rest}", get(admin))
}

async fn home() -> Html<&'static str> {
    Html("<!doctype html><title>Folio</title><h1>Projects</h1>")
}

async fn login() -> Html<&'static str> {
    Html("<!doctype html><title>Sign in</title><h1>Sign in</h1>")
}

async fn admin() -> Html<&'static str> {
    Html("<!doctype html><title>Admin</title><h1>Dashboard</h1>")
}
