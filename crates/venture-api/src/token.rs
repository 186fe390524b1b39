//! Signed bearer tokens carrying a user id.
//!
//! Tokens are HS256 JWTs whose payload is `{"user": {"id": ...}, "iat", "exp"}`.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Lifetime of an issued token unless configured otherwise.
pub const DEFAULT_TTL_SECS: u64 = 360_000;

#[derive(Debug, Error)]
pub enum TokenError {
  #[error("failed to sign token: {0}")]
  Sign(#[source] jsonwebtoken::errors::Error),

  #[error("invalid token: {0}")]
  Invalid(#[source] jsonwebtoken::errors::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimUser {
  pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
  pub user: ClaimUser,
  pub iat:  i64,
  pub exp:  i64,
}

/// Issues and verifies tokens with a process-wide secret.
pub struct TokenService {
  encoding:   EncodingKey,
  decoding:   DecodingKey,
  validation: Validation,
  ttl_secs:   i64,
}

impl TokenService {
  pub fn new(secret: &str, ttl_secs: u64) -> Self {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    Self {
      encoding: EncodingKey::from_secret(secret.as_bytes()),
      decoding: DecodingKey::from_secret(secret.as_bytes()),
      validation,
      ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
    }
  }

  /// Sign a token for `user_id` that expires `ttl_secs` from now.
  pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
    let iat = Utc::now().timestamp();
    let claims = Claims {
      user: ClaimUser { id: user_id },
      iat,
      exp: iat.saturating_add(self.ttl_secs),
    };
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
      .map_err(TokenError::Sign)
  }

  /// Check signature and expiry, returning the user id claim.
  pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
    let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
      .map_err(TokenError::Invalid)?;
    Ok(data.claims.user.id)
  }
}
