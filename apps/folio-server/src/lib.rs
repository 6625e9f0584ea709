//! Folio server wiring: configuration, logging and the three HTTP surfaces
//! (session issuer, content API, site).

pub mod config;
pub mod logging;
pub mod server;
pub mod site;

pub use config::AppConfig;
