//! Service implementation for the in-memory session store.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use folio_auth::find_cookie;
use rand::Rng;
use sha2::{Digest, Sha256};
use session_issuer_sdk::{Session, SessionUser, SessionWithUser, SignInRequest};

use crate::config::{MemorySessionConfig, UserEntry};

/// In-memory session store.
///
/// Users are fixed at construction; sessions live in a concurrent map keyed by
/// their token and vanish on restart.
pub struct Service {
    cookie_name: String,
    ttl: TimeDelta,
    users_by_id: HashMap<String, UserEntry>,
    sessions: DashMap<String, Session>,
}

impl Service {
    /// Create a store from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &MemorySessionConfig) -> Self {
        let ttl = i64::try_from(cfg.session_ttl_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);

        let users_by_id = cfg
            .users
            .iter()
            .map(|u| (u.id.clone(), u.clone()))
            .collect();

        Self {
            cookie_name: cfg.cookie_name.clone(),
            ttl,
            users_by_id,
            sessions: DashMap::new(),
        }
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Number of sessions currently held, including expired ones not yet swept.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Session named by `cookie_header` as of `now`.
    ///
    /// An expired session is removed and reported as absent, as is one whose
    /// user is no longer configured.
    #[must_use]
    pub fn lookup_at(&self, cookie_header: &str, now: DateTime<Utc>) -> Option<SessionWithUser> {
        let token = find_cookie(cookie_header, &self.cookie_name)?;
        let session = self.sessions.get(token).map(|entry| entry.value().clone())?;

        if session.is_expired_at(now) {
            self.sessions.remove_if(token, |_, s| s.is_expired_at(now));
            tracing::debug!(session_id = %session.id, "expired session removed");
            return None;
        }

        let Some(user) = self.users_by_id.get(&session.user_id) else {
            tracing::debug!(user_id = %session.user_id, "session user no longer configured");
            return None;
        };

        Some(SessionWithUser {
            user: session_user(user),
            session,
        })
    }

    /// Check `request` against the configured users and open a session at `now`.
    ///
    /// Every successful sign-in also sweeps sessions that expired by `now`.
    #[must_use]
    pub fn sign_in_at(&self, request: &SignInRequest, now: DateTime<Utc>) -> Option<SessionWithUser> {
        let presented = password_digest(&request.password);
        let user = self.users_by_id.values().find(|u| {
            u.email.eq_ignore_ascii_case(request.email.trim())
                && digests_match(&presented, &u.password_sha256)
        })?;

        self.sweep_expired(now);
        let session = Session {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            token: new_session_token(),
            expires_at: now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
            created_at: now,
        };
        self.sessions.insert(session.token.clone(), session.clone());

        Some(SessionWithUser {
            user: session_user(user),
            session,
        })
    }

    fn sweep_expired(&self, now: DateTime<Utc>) {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| !s.is_expired_at(now));
        let swept = before.saturating_sub(self.sessions.len());
        if swept > 0 {
            tracing::debug!(swept, "expired sessions swept");
        }
    }

    /// Drop the session named by `cookie_header`. Returns whether one was removed.
    pub fn revoke(&self, cookie_header: &str) -> bool {
        find_cookie(cookie_header, &self.cookie_name)
            .and_then(|token| self.sessions.remove(token))
            .is_some()
    }
}

fn session_user(user: &UserEntry) -> SessionUser {
    SessionUser {
        id: user.id.clone(),
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role,
    }
}

/// 32 random bytes, hex-encoded.
fn new_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Constant-time comparison of two hex digests, case-insensitive.
fn digests_match(presented: &str, configured: &str) -> bool {
    if presented.len() != configured.len() {
        return false;
    }
    presented
        .bytes()
        .zip(configured.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b.to_ascii_lowercase()))
        == 0
}
