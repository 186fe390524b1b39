//! JSON REST API for Venture.
//!
//! Exposes an axum [`Router`] backed by any [`venture_core::store::NetworkStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = venture_api::app(state);
//! ```

pub mod avatar;
pub mod error;
pub mod guard;
pub mod password;
pub mod posts;
pub mod profiles;
pub mod session;
pub mod token;
pub mod users;
pub mod validate;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post, put},
};
use serde::Serialize;
use uuid::Uuid;
use venture_core::{store::NetworkStore, user::User};

pub use error::ApiError;
pub use token::TokenService;

// ─── Configuration ────────────────────────────────────────────────────────────

pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Settings the handlers read at request time.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  /// bcrypt work factor for new password hashes.
  pub bcrypt_cost:   u32,
  /// Verified against when a login names an unknown email.
  pub fallback_hash: String,
}

impl ApiConfig {
  /// Build the config, hashing the login fallback at `bcrypt_cost`.
  pub fn new(bcrypt_cost: u32) -> Result<Self, ApiError> {
    Ok(Self { bcrypt_cost, fallback_hash: password::fallback_hash(bcrypt_cost)? })
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers. Built once at startup.
#[derive(Clone)]
pub struct AppState<S: NetworkStore> {
  pub store:  Arc<S>,
  pub tokens: Arc<TokenService>,
  pub config: Arc<ApiConfig>,
}

// ─── Shared response bodies ──────────────────────────────────────────────────

/// `{"token": "..."}` returned by registration and login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
  pub token: String,
}

/// `{"msg": "..."}` returned by deletions.
#[derive(Debug, Serialize)]
pub struct Message {
  pub msg: &'static str,
}

/// Parse an id taken from the path. A malformed id cannot name an existing
/// record, so it is reported the same way as a missing one.
pub(crate) fn parse_id(raw: &str, not_found: &'static str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(not_found))
}

/// Load the account behind a token. Tokens outlive deleted accounts, so a
/// missing user is a 404 rather than a store failure.
pub(crate) async fn load_user<S>(state: &AppState<S>, user_id: Uuid) -> Result<User, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  state
    .store
    .get_user(user_id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound("User not found"))
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the `/api` router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: NetworkStore + Clone + 'static,
{
  Router::new()
    // Users & session
    .route("/users", post(users::register::<S>))
    .route("/auth", get(session::current_user::<S>).post(session::login::<S>))
    // Profiles
    .route(
      "/profile",
      get(profiles::list::<S>)
        .post(profiles::upsert::<S>)
        .delete(profiles::delete_account::<S>),
    )
    .route("/profile/me", get(profiles::me::<S>))
    .route("/profile/user/{user_id}", get(profiles::by_user::<S>))
    .route("/profile/experience", put(profiles::add_experience::<S>))
    .route("/profile/experience/{exp_id}", delete(profiles::remove_experience::<S>))
    .route("/profile/education", put(profiles::add_education::<S>))
    .route("/profile/education/{edu_id}", delete(profiles::remove_education::<S>))
    // Posts
    .route("/posts", get(posts::list::<S>).post(posts::create::<S>))
    .route("/posts/{id}", get(posts::get_one::<S>).delete(posts::delete_one::<S>))
    .route("/posts/{id}/like", put(posts::like::<S>))
    .route("/posts/{id}/unlike", put(posts::unlike::<S>))
    .route("/posts/{id}/comment", post(posts::comment::<S>))
    .route("/posts/{id}/comment/{comment_id}", delete(posts::uncomment::<S>))
    .with_state(state)
}

/// The complete application: a liveness route at `/` and the API under
/// `/api`.
pub fn app<S>(state: AppState<S>) -> Router<()>
where
  S: NetworkStore + Clone + 'static,
{
  Router::new()
    .route("/", get(|| async { "API Running" }))
    .nest("/api", api_router(state))
}

#[cfg(test)]
mod tests;
