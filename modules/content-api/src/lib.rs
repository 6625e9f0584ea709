#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Content API
//!
//! Resource server for the portfolio's projects. Reads are public; writes go
//! through [`RequireAdmin`](folio_auth::axum_ext::RequireAdmin), so an
//! unauthenticated or non-admin caller is rejected with
//! `401 {"error":"Unauthorized"}` before the repository is touched.

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

pub use api::rest::routes::register_routes;
pub use config::ContentApiConfig;
pub use domain::{DomainError, NewProject, Project, ProjectsRepository, Service};
pub use infra::storage::memory_repo::InMemoryProjectsRepository;
