use serde::Serialize;

use crate::role::Role;

/// `AuthenticatedUser` is the verified identity behind a single request.
///
/// Derived from a verified credential or a session lookup and dropped when the
/// request completes. It is never persisted and never cached across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    /// Opaque user identifier (`sub` claim / session user id).
    subject: String,
    /// Contact identity, informational only.
    email: String,
    /// Authorization level.
    role: Role,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn builder() -> AuthenticatedUserBuilder {
        AuthenticatedUserBuilder::default()
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[derive(Default)]
pub struct AuthenticatedUserBuilder {
    subject: String,
    email: String,
    role: Role,
}

impl AuthenticatedUserBuilder {
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn build(self) -> AuthenticatedUser {
        AuthenticatedUser {
            subject: self.subject,
            email: self.email,
            role: self.role,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn builder_full() {
        let user = AuthenticatedUser::builder()
            .subject("user-1")
            .email("owner@example.com")
            .role(Role::Admin)
            .build();

        assert_eq!(user.subject(), "user-1");
        assert_eq!(user.email(), "owner@example.com");
        assert_eq!(user.role(), Role::Admin);
        assert!(user.is_admin());
    }

    #[test]
    fn builder_defaults_to_standard_user() {
        let user = AuthenticatedUser::builder().subject("user-2").build();

        assert_eq!(user.role(), Role::User);
        assert!(!user.is_admin());
        assert!(user.email().is_empty());
    }

    #[test]
    fn serializes_public_fields() {
        let user = AuthenticatedUser::builder()
            .subject("user-3")
            .email("a@b.c")
            .role(Role::User)
            .build();

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"subject": "user-3", "email": "a@b.c", "role": "USER"})
        );
    }
}
