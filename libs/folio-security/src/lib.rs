#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod role;
pub mod user;

pub use role::{Role, UnknownRole};
pub use user::{AuthenticatedUser, AuthenticatedUserBuilder};
