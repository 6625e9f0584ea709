//! Configuration for the edge gate.

use serde::{Deserialize, Serialize};

/// How the gate decides whether a session cookie is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeGateMode {
    /// Any recognized session cookie with a non-empty value is accepted.
    #[default]
    Presence,
    /// The cookie must also resolve to a live session at the issuer.
    Verified,
}

/// Configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EdgeGateConfig {
    /// Path prefix of the gated area, matched on segment boundaries.
    pub admin_prefix: String,

    /// Redirect target for rejected requests. Never gated itself.
    pub login_path: String,

    /// Cookie names recognized as carrying a session.
    pub cookie_names: Vec<String>,

    pub mode: EdgeGateMode,

    /// Base URL of the session issuer, used in verified mode.
    pub issuer_url: String,

    /// In verified mode, also require the session user to hold `ADMIN`.
    pub require_admin_role: bool,

    /// Upper bound on a single issuer lookup, in milliseconds.
    pub resolver_timeout_ms: u64,
}

impl Default for EdgeGateConfig {
    fn default() -> Self {
        Self {
            admin_prefix: "/admin".to_owned(),
            login_path: "/login".to_owned(),
            cookie_names: vec![
                "folio.session_token".to_owned(),
                "__Secure-folio.session_token".to_owned(),
            ],
            mode: EdgeGateMode::Presence,
            issuer_url: "http://127.0.0.1:8081".to_owned(),
            require_admin_role: false,
            resolver_timeout_ms: 2000,
        }
    }
}
