//! Error types for `venture-core`.

use thiserror::Error;
use uuid::Uuid;

/// Violations of the rules that govern in-document mutations.
#[derive(Debug, Error)]
pub enum Error {
  #[error("post already liked by {0}")]
  AlreadyLiked(Uuid),

  #[error("post has not been liked by {0}")]
  NotLiked(Uuid),

  #[error("comment not found: {0}")]
  CommentNotFound(String),

  #[error("comment {comment_id} is not owned by {user_id}")]
  NotCommentAuthor { comment_id: Uuid, user_id: Uuid },

  #[error("invalid date for {field}: {value:?}")]
  InvalidDate { field: &'static str, value: String },

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
