//! Bearer-token extractor guarding private routes.

use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, header, request::Parts},
};
use uuid::Uuid;
use venture_core::store::NetworkStore;

use crate::{AppState, error::ApiError};

/// Header the client sends its token in.
pub const TOKEN_HEADER: &str = "x-auth-token";

/// The authenticated caller. Present in a handler's arguments means the
/// request carried a valid token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

/// Pull the raw token from `x-auth-token`, or from `Authorization: Bearer`.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
  if let Some(token) = headers.get(TOKEN_HEADER).and_then(|v| v.to_str().ok()) {
    return Some(token.trim()).filter(|t| !t.is_empty());
  }
  headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
    .map(str::trim)
    .filter(|t| !t.is_empty())
}

impl<S> FromRequestParts<AppState<S>> for AuthUser
where
  S: NetworkStore + Clone + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let token = extract_token(&parts.headers).ok_or_else(|| {
      tracing::warn!(path = %parts.uri.path(), "request without auth token");
      ApiError::Unauthorized("No token, authorization denied")
    })?;

    let user_id = state.tokens.verify(token).map_err(|e| {
      tracing::warn!(path = %parts.uri.path(), error = %e, "rejected auth token");
      ApiError::Unauthorized("Token is not valid")
    })?;

    Ok(AuthUser(user_id))
  }
}
