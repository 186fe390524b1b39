//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use venture_core::store::StoreError;

use crate::token::TokenError;

/// One violated field rule, as reported in a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field: String,
  pub msg:   String,
}

impl FieldError {
  pub fn new(field: impl Into<String>, msg: impl Into<String>) -> Self {
    Self { field: field.into(), msg: msg.into() }
  }
}

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("validation failed on {} field(s)", .0.len())]
  Validation(Vec<FieldError>),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("User already exists")]
  UserExists,

  /// Shared by unknown email and wrong password.
  #[error("Invalid credentials")]
  InvalidCredentials,

  #[error("unauthorized: {0}")]
  Unauthorized(&'static str),

  /// The caller does not own the resource.
  #[error("User not authorized")]
  Forbidden,

  #[error("not found: {0}")]
  NotFound(&'static str),

  #[error("conflict: {0}")]
  Conflict(&'static str),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("internal error: {0}")]
  Internal(String),
}

impl ApiError {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    ApiError::Store(Box::new(e))
  }

  /// Error mapper for document writes: a record removed since it was read
  /// is reported as `NotFound(missing)`.
  pub fn saving<E: StoreError>(missing: &'static str) -> impl FnOnce(E) -> ApiError {
    move |e| if e.is_not_found() { ApiError::NotFound(missing) } else { ApiError::store(e) }
  }
}

impl From<venture_core::Error> for ApiError {
  fn from(e: venture_core::Error) -> Self {
    use venture_core::Error as Core;
    match e {
      Core::AlreadyLiked(_) => ApiError::Conflict("Post already liked"),
      Core::NotLiked(_) => ApiError::Conflict("Post has not yet been liked"),
      Core::CommentNotFound(_) => ApiError::NotFound("Comment does not exist"),
      Core::NotCommentAuthor { .. } => ApiError::Forbidden,
      Core::InvalidDate { field, .. } => {
        ApiError::Validation(vec![FieldError::new(field, "Invalid date")])
      }
      Core::Serialization(e) => ApiError::Internal(e.to_string()),
    }
  }
}

impl From<TokenError> for ApiError {
  fn from(e: TokenError) -> Self { ApiError::Internal(e.to_string()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::Validation(errors) => {
        (StatusCode::BAD_REQUEST, json!({ "errors": errors }))
      }
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, json!({ "msg": m })),
      ApiError::UserExists | ApiError::InvalidCredentials => (
        StatusCode::BAD_REQUEST,
        json!({ "errors": [{ "msg": self.to_string() }] }),
      ),
      ApiError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, json!({ "msg": m })),
      // Ownership failures keep the 401 the client already expects.
      ApiError::Forbidden => {
        (StatusCode::UNAUTHORIZED, json!({ "msg": self.to_string() }))
      }
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, json!({ "msg": m })),
      ApiError::Conflict(m) => (StatusCode::BAD_REQUEST, json!({ "msg": m })),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, json!({ "msg": "Server error" }))
      }
      ApiError::Internal(m) => {
        tracing::error!(error = %m, "internal failure");
        (StatusCode::INTERNAL_SERVER_ERROR, json!({ "msg": "Server error" }))
      }
    };
    (status, Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn core_errors_map_to_wire_statuses() {
    let id = uuid::Uuid::new_v4();
    let cases = [
      (venture_core::Error::AlreadyLiked(id), StatusCode::BAD_REQUEST),
      (venture_core::Error::NotLiked(id), StatusCode::BAD_REQUEST),
      (venture_core::Error::CommentNotFound("x".into()), StatusCode::NOT_FOUND),
      (
        venture_core::Error::NotCommentAuthor { comment_id: id, user_id: id },
        StatusCode::UNAUTHORIZED,
      ),
    ];
    for (core, status) in cases {
      assert_eq!(ApiError::from(core).into_response().status(), status);
    }
  }

  #[test]
  fn vanished_documents_are_not_found() {
    let id = uuid::Uuid::new_v4();
    let err = ApiError::saving("Post not found")(venture_store_sqlite::Error::PostNotFound(id));
    assert!(matches!(err, ApiError::NotFound("Post not found")));

    let err = ApiError::saving("Post not found")(venture_store_sqlite::Error::DateParse("x".into()));
    assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
