//! Handlers for `/posts` endpoints. Every route is guarded.
//!
//! Likes and comments live inside the post document, so each mutation is a
//! read-modify-write of the whole post.

use axum::{
  Json,
  extract::{Path, State},
};
use serde::Deserialize;
use venture_core::{
  post::{Comment, Like, NewPost, Post},
  store::NetworkStore,
};

use crate::{
  AppState, Message,
  error::ApiError,
  guard::AuthUser,
  load_user,
  parse_id,
  validate::{FieldRule, ValidJson, Validate},
};

const POST_NOT_FOUND: &str = "Post not found";

#[derive(Debug, Deserialize)]
pub struct TextBody {
  pub text: String,
}

impl Validate for TextBody {
  const RULES: &'static [FieldRule] = &[FieldRule::not_empty("text", "Text is required")];
}

// ─── Shared lookups ──────────────────────────────────────────────────────────

async fn load_post<S>(state: &AppState<S>, raw_id: &str) -> Result<Post, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let id = parse_id(raw_id, POST_NOT_FOUND)?;
  state
    .store
    .get_post(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound(POST_NOT_FOUND))
}

// ─── Posts ───────────────────────────────────────────────────────────────────

/// `POST /posts`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
  ValidJson(body): ValidJson<TextBody>,
) -> Result<Json<Post>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let author = load_user(&state, user_id).await?;
  let post = state
    .store
    .create_post(NewPost { user_id, text: body.text, author: author.snapshot() })
    .await
    .map_err(ApiError::store)?;

  tracing::debug!(post_id = %post.id, %user_id, "created post");
  Ok(Json(post))
}

/// `GET /posts`, newest first.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  AuthUser(_): AuthUser,
) -> Result<Json<Vec<Post>>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let posts = state.store.list_posts().await.map_err(ApiError::store)?;
  Ok(Json(posts))
}

/// `GET /posts/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  AuthUser(_): AuthUser,
  Path(id): Path<String>,
) -> Result<Json<Post>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  Ok(Json(load_post(&state, &id).await?))
}

/// `DELETE /posts/{id}`. Only the author may delete.
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
  Path(id): Path<String>,
) -> Result<Json<Message>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let post = load_post(&state, &id).await?;
  if post.user_id != user_id {
    tracing::warn!(post_id = %post.id, %user_id, "refused delete by non-author");
    return Err(ApiError::Forbidden);
  }
  state.store.delete_post(post.id).await.map_err(ApiError::store)?;
  Ok(Json(Message { msg: "Post deleted" }))
}

// ─── Likes ───────────────────────────────────────────────────────────────────

/// `PUT /posts/{id}/like`
pub async fn like<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
  Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let mut post = load_post(&state, &id).await?;
  post.like(user_id)?;
  state.store.save_post(&post).await.map_err(ApiError::saving(POST_NOT_FOUND))?;
  Ok(Json(post.likes))
}

/// `PUT /posts/{id}/unlike`
pub async fn unlike<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
  Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let mut post = load_post(&state, &id).await?;
  post.unlike(user_id)?;
  state.store.save_post(&post).await.map_err(ApiError::saving(POST_NOT_FOUND))?;
  Ok(Json(post.likes))
}

// ─── Comments ────────────────────────────────────────────────────────────────

/// `POST /posts/{id}/comment`
pub async fn comment<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
  Path(id): Path<String>,
  ValidJson(body): ValidJson<TextBody>,
) -> Result<Json<Vec<Comment>>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let mut post = load_post(&state, &id).await?;
  let author = load_user(&state, user_id).await?;
  post.add_comment(user_id, body.text, author.snapshot());
  state.store.save_post(&post).await.map_err(ApiError::saving(POST_NOT_FOUND))?;
  Ok(Json(post.comments))
}

/// `DELETE /posts/{id}/comment/{comment_id}`. Only the comment author may delete.
pub async fn uncomment<S>(
  State(state): State<AppState<S>>,
  AuthUser(user_id): AuthUser,
  Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, ApiError>
where
  S: NetworkStore + Clone + 'static,
{
  let mut post = load_post(&state, &id).await?;
  post.remove_comment(&comment_id, user_id)?;
  state.store.save_post(&post).await.map_err(ApiError::saving(POST_NOT_FOUND))?;
  Ok(Json(post.comments))
}
