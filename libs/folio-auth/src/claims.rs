//! Credential claims

use folio_security::{AuthenticatedUser, Role};
use serde::{Deserialize, Serialize};

/// Claims of a signed credential (HS256 JWT payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Subject (user id).
    pub sub: String,

    /// Contact identity, informational.
    pub email: String,

    /// Display name, informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Authorization level.
    pub role: Role,

    /// Issued at (unix seconds).
    pub iat: i64,

    /// Expires at (unix seconds), exclusive.
    pub exp: i64,

    /// Minting service.
    pub iss: String,

    /// Intended recipient.
    pub aud: String,
}

impl Credential {
    /// `true` when `now` falls inside `[iat, exp)`.
    #[must_use]
    pub fn is_within_window(&self, now: i64) -> bool {
        self.iat <= now && now < self.exp
    }

    /// Per-request identity projection.
    #[must_use]
    pub fn to_user(&self) -> AuthenticatedUser {
        AuthenticatedUser::builder()
            .subject(self.sub.as_str())
            .email(self.email.as_str())
            .role(self.role)
            .build()
    }
}

/// Identity fields the signer copies into a fresh credential.
#[derive(Debug, Clone, Copy)]
pub struct CredentialSubject<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub name: Option<&'a str>,
    pub role: Role,
}
