//! Credential minting for the session issuer.

use jsonwebtoken::{Algorithm, EncodingKey, Header};

use crate::claims::{Credential, CredentialSubject};
use crate::config::AuthConfig;
use crate::errors::SignError;

/// Mints HS256 credentials for authenticated session users.
///
/// Stateless: nothing is stored per credential, each one carries its own expiry.
pub struct CredentialSigner {
    key: Option<EncodingKey>,
    issuer: String,
    audience: String,
    ttl_secs: i64,
}

impl CredentialSigner {
    #[must_use]
    pub fn new(cfg: &AuthConfig) -> Self {
        let key = cfg.secret_bytes().map(EncodingKey::from_secret);
        if key.is_none() {
            tracing::error!("auth.signing_secret is not configured; credential minting disabled");
        }
        Self {
            key,
            issuer: cfg.issuer.clone(),
            audience: cfg.audience.clone(),
            ttl_secs: i64::try_from(cfg.credential_ttl_secs).unwrap_or(i64::MAX),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.key.is_some()
    }

    /// Claims that [`sign`](Self::sign) would encode at `now`.
    #[must_use]
    pub fn claims_for(&self, subject: CredentialSubject<'_>, now: i64) -> Credential {
        Credential {
            sub: subject.id.to_owned(),
            email: subject.email.to_owned(),
            name: subject.name.map(str::to_owned),
            role: subject.role,
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        }
    }

    /// Mint a credential valid from `now` for the configured TTL.
    ///
    /// # Errors
    ///
    /// - [`SignError::MissingSecret`] when no signing secret is configured
    /// - [`SignError::Encode`] if the token cannot be encoded
    pub fn sign(&self, subject: CredentialSubject<'_>, now: i64) -> Result<String, SignError> {
        let key = self.key.as_ref().ok_or(SignError::MissingSecret)?;
        let claims = self.claims_for(subject, now);
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            key,
        )?)
    }

    /// Encode arbitrary claims with the configured key.
    ///
    /// # Errors
    ///
    /// Same as [`sign`](Self::sign).
    pub fn sign_claims(&self, claims: &Credential) -> Result<String, SignError> {
        let key = self.key.as_ref().ok_or(SignError::MissingSecret)?;
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            key,
        )?)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use folio_security::Role;

    fn subject() -> CredentialSubject<'static> {
        CredentialSubject {
            id: "user-1",
            email: "owner@example.com",
            name: Some("Owner"),
            role: Role::Admin,
        }
    }

    #[test]
    fn claims_carry_configured_issuer_audience_and_ttl() {
        let cfg = AuthConfig {
            credential_ttl_secs: 60,
            ..AuthConfig::default().with_secret("s3cret")
        };
        let signer = CredentialSigner::new(&cfg);

        let claims = signer.claims_for(subject(), 1_000);
        assert_eq!(claims.iat, 1_000);
        assert_eq!(claims.exp, 1_060);
        assert_eq!(claims.iss, cfg.issuer);
        assert_eq!(claims.aud, cfg.audience);
        assert_eq!(claims.name.as_deref(), Some("Owner"));
    }

    #[test]
    fn sign_produces_three_segment_token() {
        let signer = CredentialSigner::new(&AuthConfig::default().with_secret("s3cret"));
        let token = signer.sign(subject(), 1_000).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn sign_without_secret_fails() {
        let signer = CredentialSigner::new(&AuthConfig::default());
        assert!(!signer.is_configured());
        assert!(matches!(
            signer.sign(subject(), 1_000),
            Err(SignError::MissingSecret)
        ));
    }
}
