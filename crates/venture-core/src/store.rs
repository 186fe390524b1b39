//! The `NetworkStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `venture-store-sqlite`).
//! Higher layers (`venture-api`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  post::{NewPost, Post},
  profile::{Profile, ProfileUpdate, ProfileView},
  user::{NewUser, User},
};

/// Error type bound for store backends.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// `true` when a write was rejected because the email is already taken.
  fn is_duplicate_email(&self) -> bool { false }

  /// `true` when a document write targeted a record that no longer exists.
  fn is_not_found(&self) -> bool { false }
}

/// Abstraction over the credential, profile and post collections.
///
/// Profiles and posts are whole documents: embedded entries (experience,
/// education, likes, comments) are changed by mutating the document and
/// writing it back with [`NetworkStore::save_profile`] or
/// [`NetworkStore::save_post`]. Those writes are last-write-wins.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait NetworkStore: Send + Sync {
  type Error: StoreError;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Persist a new user. Fails with an error for which
  /// [`StoreError::is_duplicate_email`] holds if the email is taken.
  fn create_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Retrieve a user by id. Returns `None` if not found.
  fn get_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Retrieve a user by email, compared case-insensitively.
  fn find_user_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// Remove a user. Their profile goes with them; their posts do not.
  /// Returns `false` if there was no such user.
  fn delete_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Profiles ──────────────────────────────────────────────────────────

  /// Retrieve the profile owned by `user_id`.
  fn get_profile(
    &self,
    user_id: Uuid,
  ) -> impl Future<Output = Result<Option<Profile>, Self::Error>> + Send + '_;

  /// Retrieve the profile owned by `user_id`, joined with the owner's
  /// display fields.
  fn get_profile_view(
    &self,
    user_id: Uuid,
  ) -> impl Future<Output = Result<Option<ProfileView>, Self::Error>> + Send + '_;

  /// List every profile joined with its owner's display fields.
  fn list_profile_views(
    &self,
  ) -> impl Future<Output = Result<Vec<ProfileView>, Self::Error>> + Send + '_;

  /// Apply `update` to the profile owned by `user_id`, creating the profile
  /// if it does not exist yet. Runs as a single atomic step.
  fn upsert_profile(
    &self,
    user_id: Uuid,
    update: ProfileUpdate,
  ) -> impl Future<Output = Result<Profile, Self::Error>> + Send + '_;

  /// Replace a stored profile document with `profile`.
  fn save_profile<'a>(
    &'a self,
    profile: &'a Profile,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove the profile owned by `user_id`. Returns `false` if none existed.
  fn delete_profile(
    &self,
    user_id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Posts ─────────────────────────────────────────────────────────────

  /// Persist a new post. `id`, `date` and the empty likes/comments lists are
  /// set by the store.
  fn create_post(
    &self,
    input: NewPost,
  ) -> impl Future<Output = Result<Post, Self::Error>> + Send + '_;

  /// Retrieve a post by id.
  fn get_post(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Post>, Self::Error>> + Send + '_;

  /// List every post, newest first.
  fn list_posts(
    &self,
  ) -> impl Future<Output = Result<Vec<Post>, Self::Error>> + Send + '_;

  /// Replace a stored post document with `post`.
  fn save_post<'a>(
    &'a self,
    post: &'a Post,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove a post. Returns `false` if there was no such post.
  fn delete_post(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
