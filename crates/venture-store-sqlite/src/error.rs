//! Error type for `venture-store-sqlite`.

use thiserror::Error;
use venture_core::store::StoreError;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("a user with email {0:?} already exists")]
  DuplicateEmail(String),

  /// A document write targeted a profile that no longer exists.
  #[error("profile not found: {0}")]
  ProfileNotFound(uuid::Uuid),

  /// A document write targeted a post that no longer exists.
  #[error("post not found: {0}")]
  PostNotFound(uuid::Uuid),
}

impl StoreError for Error {
  fn is_duplicate_email(&self) -> bool { matches!(self, Error::DuplicateEmail(_)) }

  fn is_not_found(&self) -> bool {
    matches!(self, Error::ProfileNotFound(_) | Error::PostNotFound(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
