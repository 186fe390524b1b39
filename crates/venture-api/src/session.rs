//! Handlers for `/auth` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/auth` | Body: `{"email","password"}`; returns `{"token"}` |
//! | `GET`  | `/auth` | Guarded; the caller's user record without its hash |

use axum::{Json, extract::State};
use serde::Deserialize;
use venture_core::{store::NetworkStore, user::PublicUser};

use crate::{
  AppState, TokenResponse,
  error::ApiError,
  guard::AuthUser,
  load_user,
  password::verify_account,
  validate::{FieldRule, ValidJson, Validate},
};

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub email:    String,
  pub password: String,
}

impl Validate for LoginBody {
  const RULES: &'static [FieldRule] = &[
    FieldRule::email("email", "Please include a valid email"),
    FieldRule::exists("password", "Password is required"),
  ];
}

/// `POST /auth`: exchange credentials for a token.
///
/// Unknown email and wrong password produce the same error after the same
/// amount of bcrypt work.
pub async fn login<S>(
  State(state): State<AppState<S>>,
  ValidJson(body): ValidJson<LoginBody>,
) -> Result<Json<TokenResponse>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let user = state
    .store
    .find_user_by_email(&body.email)
    .await
    .map_err(ApiError::store)?;

  let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
  let verified =
    verify_account(body.password, stored_hash, &state.config.fallback_hash).await?;
  let user = match user {
    Some(user) if verified => user,
    _ => return Err(ApiError::InvalidCredentials),
  };

  tracing::info!(user_id = %user.id, "user logged in");

  let token = state.tokens.issue(user.id)?;
  Ok(Json(TokenResponse { token }))
}

/// `GET /auth`
pub async fn current_user<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let user = load_user(&state, user_id).await?;
  Ok(Json(PublicUser::from(user)))
}
