//! ES256 provider token minting.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, Header, encode};
use tracing::debug;

use sendpush_core::{AppError, AppResult};

use super::claims::ProviderClaims;
use super::key::decode_signing_key;
use crate::credential::SigningCredential;

/// A signed provider token, valid for every device of one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps an already signed compact JWT.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The compact JWT.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `authorization` header sent to APNs.
    pub fn authorization_header(&self) -> String {
        format!("bearer {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Turns the static signing credential into fresh provider tokens.
///
/// The key is decoded on every call; nothing is cached between
/// invocations.
#[derive(Debug, Clone)]
pub struct CredentialMinter {
    credential: SigningCredential,
}

impl CredentialMinter {
    /// Creates a minter for the given credential.
    pub fn new(credential: SigningCredential) -> Self {
        Self { credential }
    }

    /// Mints a token issued now.
    pub fn mint(&self) -> AppResult<AuthToken> {
        self.mint_at(Utc::now().timestamp())
    }

    /// Mints a token with the given issued-at time (seconds since epoch).
    pub fn mint_at(&self, issued_at: i64) -> AppResult<AuthToken> {
        if !self.credential.is_complete() {
            return Err(AppError::configuration("Missing APNs configuration secrets."));
        }

        let key = decode_signing_key(&self.credential.private_key_base64)?;

        let mut header = Header::new(Algorithm::ES256);
        header.kid = Some(self.credential.key_id.clone());

        let claims = ProviderClaims {
            iss: self.credential.team_id.clone(),
            iat: issued_at,
        };

        let token = encode(&header, &claims, &key)
            .map_err(|e| AppError::configuration(format!("Failed to sign APNs token: {e}")))?;

        debug!(key_id = %self.credential.key_id, iat = issued_at, "Minted APNs provider token");
        Ok(AuthToken(token))
    }
}
