use thiserror::Error;

/// Errors raised while building the gate.
#[derive(Debug, Error)]
pub enum EdgeGateError {
    #[error("invalid issuer url '{url}': {reason}")]
    InvalidIssuerUrl { url: String, reason: String },
}

/// Faults while resolving a session at the issuer.
///
/// The gate treats every variant as "no session".
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("issuer request failed: {0}")]
    Transport(String),

    #[error("issuer did not answer within {0} ms")]
    Timeout(u64),

    #[error("issuer answered with status {0}")]
    Status(u16),

    #[error("issuer response could not be decoded: {0}")]
    Decode(String),
}
