//! Application configuration.
//!
//! Loaded once at startup from an optional YAML file merged with `FOLIO__*`
//! environment variables (`__` separates nesting levels), then handed by
//! reference to every component constructor.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use content_api::ContentApiConfig;
use edge_gate::EdgeGateConfig;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use folio_auth::AuthConfig;
use memory_session_plugin::MemorySessionConfig;
use serde::Deserialize;
use session_issuer::SessionIssuerConfig;

use crate::logging::LoggingConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config/folio.yaml";
pub const ENV_PREFIX: &str = "FOLIO__";

/// Listener addresses and shared HTTP limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub issuer_addr: SocketAddr,
    pub api_addr: SocketAddr,
    pub site_addr: SocketAddr,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            issuer_addr: SocketAddr::from(([127, 0, 0, 1], 8081)),
            api_addr: SocketAddr::from(([127, 0, 0, 1], 8082)),
            site_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub session_issuer: SessionIssuerConfig,
    pub memory_sessions: MemorySessionConfig,
    pub content: ContentApiConfig,
    pub edge_gate: EdgeGateConfig,
}

impl AppConfig {
    /// Load from `path` (or [`DEFAULT_CONFIG_PATH`] when present) plus the
    /// environment.
    ///
    /// # Errors
    ///
    /// An explicitly given file that does not exist, or any parse / type error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(p) if !p.exists() => {
                anyhow::bail!("config file {} does not exist", p.display());
            }
            Some(p) => Some(p.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_PATH)).filter(|p| p.exists()),
        };
        Self::from_figment(Self::figment(file.as_deref()))
    }

    /// Provider chain: YAML file (if any), then `FOLIO__*` variables.
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::new();
        if let Some(file) = file {
            figment = figment.merge(Yaml::file(file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    ///
    /// Any parse or type error reported by the providers.
    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        figment
            .extract()
            .context("failed to load configuration")
    }
}
