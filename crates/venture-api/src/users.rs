//! Registration handler (`POST /users`).

use axum::{Json, extract::State};
use serde::Deserialize;
use venture_core::{
  store::{NetworkStore, StoreError},
  user::NewUser,
};

use crate::{
  AppState, TokenResponse,
  avatar::gravatar_url,
  error::ApiError,
  password::hash_password,
  validate::{FieldRule, ValidJson, Validate},
};

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub password:   String,
}

impl Validate for RegisterBody {
  const RULES: &'static [FieldRule] = &[
    FieldRule::not_empty("first_name", "First name is required"),
    FieldRule::not_empty("last_name", "Last name is required"),
    FieldRule::email("email", "Please include a valid email"),
    FieldRule::min_length("password", 8, "Please enter a password with 8 or more characters"),
  ];
}

/// `POST /users`: create an account and return a token for it.
pub async fn register<S>(
  State(state): State<AppState<S>>,
  ValidJson(body): ValidJson<RegisterBody>,
) -> Result<Json<TokenResponse>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let email = body.email.trim().to_owned();

  let existing = state
    .store
    .find_user_by_email(&email)
    .await
    .map_err(ApiError::store)?;
  if existing.is_some() {
    return Err(ApiError::UserExists);
  }

  let avatar = gravatar_url(&email);
  let password_hash = hash_password(body.password, state.config.bcrypt_cost).await?;

  let user = state
    .store
    .create_user(NewUser {
      first_name: body.first_name.trim().to_owned(),
      last_name: body.last_name.trim().to_owned(),
      email,
      password_hash,
      avatar,
    })
    .await
    .map_err(|e| {
      // Lost a race with a concurrent registration.
      if e.is_duplicate_email() { ApiError::UserExists } else { ApiError::store(e) }
    })?;

  tracing::info!(user_id = %user.id, "registered user");

  let token = state.tokens.issue(user.id)?;
  Ok(Json(TokenResponse { token }))
}
