//! Domain layer for the session issuer.

pub mod error;
pub mod service;

pub use error::DomainError;
pub use service::Service;
