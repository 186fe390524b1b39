//! bcrypt hashing, run on the blocking pool.

use crate::error::ApiError;

/// Hash `password` with a fresh random salt at `cost`.
pub async fn hash_password(password: String, cost: u32) -> Result<String, ApiError> {
  tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?
    .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Compare `password` against a stored bcrypt `hash`.
pub async fn verify_password(password: String, hash: String) -> Result<bool, ApiError> {
  tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?
    .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Verify `password` for an account that may not exist.
///
/// A missing account is checked against `fallback_hash` and then refused,
/// so both kinds of failed login pay one bcrypt round at the same cost.
pub async fn verify_account(
  password: String,
  stored_hash: Option<String>,
  fallback_hash: &str,
) -> Result<bool, ApiError> {
  match stored_hash {
    Some(hash) => verify_password(password, hash).await,
    None => {
      verify_password(password, fallback_hash.to_owned()).await?;
      Ok(false)
    }
  }
}

/// Hash of a throwaway secret at `cost`, used as `fallback_hash`.
pub fn fallback_hash(cost: u32) -> Result<String, ApiError> {
  bcrypt::hash("venture: no such account", cost).map_err(|e| ApiError::Internal(e.to_string()))
}
