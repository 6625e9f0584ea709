//! Configuration for the in-memory session store.

use folio_security::Role;
use serde::{Deserialize, Serialize};

/// Plugin configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemorySessionConfig {
    /// Name of the cookie carrying the session token.
    pub cookie_name: String,

    /// Session lifetime in seconds.
    pub session_ttl_secs: u64,

    /// Users allowed to sign in.
    pub users: Vec<UserEntry>,
}

impl Default for MemorySessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "folio.session_token".to_owned(),
            session_ttl_secs: 7 * 24 * 60 * 60,
            users: Vec::new(),
        }
    }
}

/// A user allowed to sign in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Hex-encoded SHA-256 of the password.
    pub password_sha256: String,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn user_role_defaults_to_user() {
        let entry: UserEntry = serde_json::from_str(
            r#"{"id":"u1","email":"a@b.test","password_sha256":"00"}"#,
        )
        .unwrap();
        assert_eq!(entry.role, Role::User);
        assert!(entry.name.is_none());
    }

    #[test]
    fn rejects_unknown_fields() {
        let parsed: Result<MemorySessionConfig, _> =
            serde_json::from_str(r#"{"cookie_name":"x","colour":"blue"}"#);
        assert!(parsed.is_err());
    }
}
