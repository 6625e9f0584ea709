//! Domain models for sessions.

use std::fmt;

use chrono::{DateTime, Utc};
use folio_security::{AuthenticatedUser, Role};
use serde::{Deserialize, Serialize};

/// User attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
}

impl SessionUser {
    /// Per-request identity projection.
    #[must_use]
    pub fn to_authenticated(&self) -> AuthenticatedUser {
        AuthenticatedUser::builder()
            .subject(self.id.as_str())
            .email(self.email.as_str())
            .role(self.role)
            .build()
    }
}

/// Server-side session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub user_id: String,
    /// Cookie value naming this session. Never serialized.
    #[serde(skip)]
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Body of a successful session lookup: `{user, session}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWithUser {
    pub user: SessionUser,
    pub session: Session,
}

/// Credentials presented at sign-in.
#[derive(Clone, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
