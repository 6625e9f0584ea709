//! Credential configuration shared by the signer and the verifier.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

fn default_credential_ttl_secs() -> u64 {
    15 * 60
}

/// Shared signing secret plus the issuer / audience every credential must carry.
///
/// Built once at startup and handed by reference to
/// [`CredentialSigner::new`](crate::CredentialSigner::new) and
/// [`CredentialVerifier::new`](crate::CredentialVerifier::new).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    /// HMAC secret. Absent (or empty) means every verification fails.
    #[serde(deserialize_with = "deserialize_secret")]
    pub signing_secret: Option<SecretString>,
    /// Expected `iss` claim.
    pub issuer: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// Lifetime of freshly minted credentials.
    #[serde(default = "default_credential_ttl_secs")]
    pub credential_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signing_secret: None,
            issuer: "folio-auth".to_owned(),
            audience: "folio-api".to_owned(),
            credential_ttl_secs: default_credential_ttl_secs(),
        }
    }
}

impl AuthConfig {
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.signing_secret = Some(SecretString::from(secret.into()));
        self
    }

    /// Secret bytes, or `None` when the secret is missing or blank.
    #[must_use]
    pub fn secret_bytes(&self) -> Option<&[u8]> {
        self.signing_secret
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|s| !s.trim().is_empty())
            .map(str::as_bytes)
    }
}

/// Environment providers type scalar-looking values, so `true` or `12345`
/// must still be taken as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSecret {
    Text(String),
    Flag(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<RawSecret> for SecretString {
    fn from(raw: RawSecret) -> Self {
        let text = match raw {
            RawSecret::Text(s) => s,
            RawSecret::Flag(b) => b.to_string(),
            RawSecret::Signed(n) => n.to_string(),
            RawSecret::Unsigned(n) => n.to_string(),
            RawSecret::Float(n) => n.to_string(),
        };
        SecretString::from(text)
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawSecret> = Option::deserialize(deserializer)?;
    Ok(raw.map(SecretString::from))
}
