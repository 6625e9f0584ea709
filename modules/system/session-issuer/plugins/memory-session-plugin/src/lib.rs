#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! In-memory session store plugin
//!
//! Implements [`SessionStoreClient`](session_issuer_sdk::SessionStoreClient)
//! over a fixed list of configured users and a process-local session table.
//! Sessions do not survive a restart; intended for single-owner deployments
//! and tests.
//!
//! ## Configuration
//!
//! ```yaml
//! memory_sessions:
//!   cookie_name: "folio.session_token"
//!   session_ttl_secs: 604800
//!   users:
//!     - id: "owner"
//!       email: "owner@example.com"
//!       name: "Site Owner"
//!       role: ADMIN
//!       password_sha256: "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
//! ```

pub mod config;
pub mod domain;

pub use config::{MemorySessionConfig, UserEntry};
pub use domain::service::Service as MemorySessionStore;
