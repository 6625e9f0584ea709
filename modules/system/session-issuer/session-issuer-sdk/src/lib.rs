//! Session Issuer SDK
//!
//! This crate provides the public contract of the session store the issuer
//! bridges to:
//!
//! - [`SessionStoreClient`] - issue, look up and revoke sessions
//! - [`SessionWithUser`], [`Session`], [`SessionUser`] - session models
//! - [`SignInRequest`] - credentials presented at sign-in
//! - [`SessionStoreError`] - error types
//!
//! ## Usage
//!
//! ```ignore
//! use session_issuer_sdk::SessionStoreClient;
//!
//! let found = store.get_session("folio.session_token=abc").await?;
//! if let Some(current) = found {
//!     tracing::info!(user = %current.user.id, "session found");
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;

pub use api::SessionStoreClient;
pub use error::SessionStoreError;
pub use models::{Session, SessionUser, SessionWithUser, SignInRequest};
