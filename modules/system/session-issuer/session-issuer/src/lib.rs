//! Session Issuer Module
//!
//! Bridges HTTP clients to a [`SessionStoreClient`](session_issuer_sdk::SessionStoreClient):
//! sign-in / sign-out, the "current session" query used by the UI and the
//! perimeter, and on-demand minting of signed credentials for the resource
//! server.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod config;
pub mod domain;

pub use api::rest::routes::register_routes;
pub use config::{Environment, SessionIssuerConfig};
pub use domain::{DomainError, Service};
