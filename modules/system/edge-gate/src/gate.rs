//! Gate decision.

use std::sync::Arc;
use std::time::Duration;

use folio_auth::has_any_cookie;

use crate::config::{EdgeGateConfig, EdgeGateMode};
use crate::error::EdgeGateError;
use crate::resolver::{IssuerSessionResolver, SessionResolver};

/// Outcome for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Admit,
    Redirect,
}

/// Per-request perimeter check. Holds configuration only; no state is kept
/// between requests.
pub struct EdgeGate {
    admin_prefix: String,
    login_path: String,
    cookie_names: Vec<String>,
    mode: EdgeGateMode,
    require_admin_role: bool,
    resolver: Option<Arc<dyn SessionResolver>>,
}

impl EdgeGate {
    /// Build a gate from configuration.
    ///
    /// In [`EdgeGateMode::Verified`] an [`IssuerSessionResolver`] is created
    /// for `cfg.issuer_url`.
    ///
    /// # Errors
    ///
    /// [`EdgeGateError::InvalidIssuerUrl`] in verified mode when the issuer URL is unusable.
    pub fn from_config(cfg: &EdgeGateConfig) -> Result<Self, EdgeGateError> {
        let resolver: Option<Arc<dyn SessionResolver>> = match cfg.mode {
            EdgeGateMode::Presence => None,
            EdgeGateMode::Verified => Some(Arc::new(IssuerSessionResolver::new(
                &cfg.issuer_url,
                Duration::from_millis(cfg.resolver_timeout_ms),
            )?)),
        };
        Ok(Self::new(cfg, resolver))
    }

    /// Build a gate with an explicit resolver.
    ///
    /// A verified-mode gate without a resolver redirects every gated request.
    #[must_use]
    pub fn new(cfg: &EdgeGateConfig, resolver: Option<Arc<dyn SessionResolver>>) -> Self {
        if cfg.mode == EdgeGateMode::Verified && resolver.is_none() {
            tracing::error!("edge gate in verified mode has no session resolver; admin area is closed");
        }
        Self {
            admin_prefix: cfg.admin_prefix.trim_end_matches('/').to_owned(),
            login_path: cfg.login_path.clone(),
            cookie_names: cfg.cookie_names.clone(),
            mode: cfg.mode,
            require_admin_role: cfg.require_admin_role,
            resolver,
        }
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Whether `path` lies in the gated area.
    ///
    /// `/admin` and `/admin/...` are gated; `/administrator` is not. The login
    /// path is never gated.
    #[must_use]
    pub fn is_gated(&self, path: &str) -> bool {
        if path == self.login_path {
            return false;
        }
        match path.strip_prefix(self.admin_prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Presence-only decision: gated path and no recognized cookie means redirect.
    #[must_use]
    pub fn presence_decision(&self, path: &str, cookie_header: &str) -> GateDecision {
        if self.is_gated(path) && !has_any_cookie(cookie_header, self.cookie_names.as_slice()) {
            GateDecision::Redirect
        } else {
            GateDecision::Admit
        }
    }

    /// Full decision for the configured mode.
    pub async fn decide(&self, path: &str, cookie_header: &str) -> GateDecision {
        let presence = self.presence_decision(path, cookie_header);
        if presence == GateDecision::Redirect {
            tracing::debug!(path, "no session cookie; redirecting to login");
            return presence;
        }
        if self.mode == EdgeGateMode::Presence || !self.is_gated(path) {
            return presence;
        }

        let Some(resolver) = &self.resolver else {
            return GateDecision::Redirect;
        };
        match resolver.resolve(cookie_header).await {
            Ok(Some(user)) if !self.require_admin_role || user.role.is_admin() => GateDecision::Admit,
            Ok(Some(user)) => {
                tracing::debug!(path, user_id = %user.id, "session user is not an admin; redirecting");
                GateDecision::Redirect
            }
            Ok(None) => {
                tracing::debug!(path, "session cookie names no live session; redirecting");
                GateDecision::Redirect
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "session resolution failed; redirecting");
                GateDecision::Redirect
            }
        }
    }
}
