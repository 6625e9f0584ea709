#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Edge Gate
//!
//! Perimeter check placed in front of the site's admin area. A request whose
//! path falls under the admin prefix is redirected to the login route unless
//! it carries a recognized session cookie.
//!
//! In the default [`EdgeGateMode::Presence`] mode only the cookie's presence
//! is checked, which keeps anonymous visitors out of the admin shell but is
//! not an authorization boundary: admin data is protected by the resource
//! server's credential check. [`EdgeGateMode::Verified`] additionally asks a
//! [`SessionResolver`] whether the cookie names a live session and fails
//! closed on any resolver fault.
//!
//! ```ignore
//! let gate = Arc::new(EdgeGate::from_config(&cfg.edge_gate)?);
//! let router = edge_gate::install(site_routes, gate);
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod middleware;
pub mod resolver;

pub use config::{EdgeGateConfig, EdgeGateMode};
pub use error::{EdgeGateError, ResolveError};
pub use gate::{EdgeGate, GateDecision};
pub use middleware::{edge_gate_middleware, install};
pub use resolver::{IssuerSessionResolver, SessionResolver};
