//! Access token signing and verification (HS256).

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};
use secrecy::ExposeSecret;
use thiserror::Error;

use bookmarks_core::UserId;

use crate::config::JwtConfig;
use crate::models::{AccessToken, Claims};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Signs and verifies access tokens with the configured secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    expires_in_secs: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("keys", &"[REDACTED]")
            .field("expires_in_secs", &self.expires_in_secs)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    #[must_use]
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.expose_secret().as_bytes();
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            expires_in_secs: config.expires_in_secs,
        }
    }

    /// Sign a token for `user_id`, valid from now.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encode` if signing fails.
    pub fn issue(&self, user_id: UserId, email: &str) -> Result<AccessToken, TokenError> {
        self.issue_at(user_id, email, chrono::Utc::now().timestamp())
    }

    /// Sign a token as if issued at `iat` (seconds since epoch).
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encode` if signing fails.
    pub fn issue_at(
        &self,
        user_id: UserId,
        email: &str,
        iat: i64,
    ) -> Result<AccessToken, TokenError> {
        let claims = Claims {
            sub: user_id,
            email: email.to_owned(),
            iat,
            exp: iat + self.expires_in_secs,
        };

        let access_token =
            encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Encode)?;

        Ok(AccessToken { access_token })
    }

    /// Verify signature and expiry and return the payload.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Expired` for an expired token and
    /// `TokenError::Invalid` for anything else that fails verification.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            })
    }
}
