//! Credential handling shared by the Folio services.
//!
//! - [`CredentialSigner`] mints HS256 credentials inside the session issuer.
//! - [`CredentialVerifier`] validates them inside the resource server with no
//!   network round trip: a pure function of the token, the [`AuthConfig`] it
//!   was built from and the current time.
//! - [`axum_ext::RequireAdmin`] gates privileged handlers.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod axum_ext;
pub mod bearer;
pub mod claims;
pub mod config;
pub mod cookies;
pub mod errors;
pub mod signer;
pub mod verifier;

pub use bearer::{extract_bearer_token, parse_bearer_value};
pub use cookies::{find_cookie, has_any_cookie, request_cookie_header};
pub use claims::{Credential, CredentialSubject};
pub use config::AuthConfig;
pub use errors::{AuthError, SignError};
pub use signer::CredentialSigner;
pub use verifier::CredentialVerifier;
