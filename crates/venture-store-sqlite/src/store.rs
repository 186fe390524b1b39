//! [`SqliteStore`]: the SQLite implementation of [`NetworkStore`].

use std::path::Path;

use chrono::{SubsecRound as _, Utc};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use venture_core::{
  post::{NewPost, Post},
  profile::{Profile, ProfileUpdate, ProfileView},
  store::NetworkStore,
  user::{NewUser, User},
};

use crate::{
  encode::{
    decode_post, decode_profile, encode_dt, encode_post, encode_profile, encode_uuid,
    json_in_call, RawProfileView, RawUser, PROFILE_VIEW_SELECT, USER_COLUMNS,
  },
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Venture store backed by a single SQLite file.
///
/// The inner connection is reference-counted, so clones share one database thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn query_user(&self, column: &'static str, value: String) -> Result<Option<User>> {
    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = ?1"),
            rusqlite::params![value],
            RawUser::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }
}

/// Only UNIQUE failures; NOT NULL, CHECK and foreign-key violations are
/// reported as ordinary database errors.
pub(crate) fn is_unique_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(f, _)
      if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

// ─── NetworkStore impl ───────────────────────────────────────────────────────

impl NetworkStore for SqliteStore {
  type Error = Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn create_user(&self, input: NewUser) -> Result<User> {
    let user = User {
      id:            Uuid::new_v4(),
      first_name:    input.first_name,
      last_name:     input.last_name,
      email:         input.email,
      password_hash: input.password_hash,
      avatar:        input.avatar,
      // Truncated to the stored column precision.
      date:          Utc::now().trunc_subsecs(6),
    };

    let id_str     = encode_uuid(user.id);
    let at_str     = encode_dt(user.date);
    let first_name = user.first_name.clone();
    let last_name  = user.last_name.clone();
    let email      = user.email.clone();
    let hash       = user.password_hash.clone();
    let avatar     = user.avatar.clone();

    let inserted: bool = self
      .conn
      .call(move |conn| {
        let result = conn.execute(
          &format!("INSERT INTO users ({USER_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
          rusqlite::params![id_str, first_name, last_name, email, hash, avatar, at_str],
        );
        match result {
          Ok(_) => Ok(true),
          Err(e) if is_unique_violation(&e) => Ok(false),
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    if !inserted {
      return Err(Error::DuplicateEmail(user.email));
    }
    Ok(user)
  }

  async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
    self.query_user("user_id", encode_uuid(id)).await
  }

  async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
    // The column is declared COLLATE NOCASE.
    self.query_user("email", email.trim().to_owned()).await
  }

  async fn delete_user(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM users WHERE user_id = ?1", rusqlite::params![id_str])?)
      })
      .await?;
    Ok(removed > 0)
  }

  // ── Profiles ──────────────────────────────────────────────────────────────

  async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
    let id_str = encode_uuid(user_id);
    let doc: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT document FROM profiles WHERE user_id = ?1",
            rusqlite::params![id_str],
            |r| r.get(0),
          )
          .optional()?)
      })
      .await?;

    doc.as_deref().map(decode_profile).transpose()
  }

  async fn get_profile_view(&self, user_id: Uuid) -> Result<Option<ProfileView>> {
    let id_str = encode_uuid(user_id);
    let raw: Option<RawProfileView> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("{PROFILE_VIEW_SELECT} WHERE p.user_id = ?1"),
            rusqlite::params![id_str],
            RawProfileView::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawProfileView::into_view).transpose()
  }

  async fn list_profile_views(&self) -> Result<Vec<ProfileView>> {
    let raws: Vec<RawProfileView> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("{PROFILE_VIEW_SELECT} ORDER BY p.rowid"))?;
        let rows = stmt
          .query_map([], RawProfileView::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawProfileView::into_view).collect()
  }

  async fn upsert_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<Profile> {
    let id_str = encode_uuid(user_id);
    let now    = encode_dt(Utc::now());

    let profile = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let existing: Option<String> = tx
          .query_row(
            "SELECT document FROM profiles WHERE user_id = ?1",
            rusqlite::params![id_str],
            |r| r.get(0),
          )
          .optional()?;

        let profile = match existing {
          Some(doc) => {
            let mut profile: Profile = serde_json::from_str(&doc).map_err(json_in_call)?;
            update.apply(&mut profile);
            let doc = serde_json::to_string(&profile).map_err(json_in_call)?;
            tx.execute(
              "UPDATE profiles SET document = ?1, updated_at = ?2 WHERE user_id = ?3",
              rusqlite::params![doc, now, id_str],
            )?;
            profile
          }
          None => {
            let profile = update.into_profile(user_id);
            let doc = serde_json::to_string(&profile).map_err(json_in_call)?;
            tx.execute(
              "INSERT INTO profiles (profile_id, user_id, document, updated_at)
               VALUES (?1, ?2, ?3, ?4)",
              rusqlite::params![encode_uuid(profile.id), id_str, doc, now],
            )?;
            profile
          }
        };

        tx.commit()?;
        Ok(profile)
      })
      .await?;

    Ok(profile)
  }

  async fn save_profile(&self, profile: &Profile) -> Result<()> {
    let profile_id = profile.id;
    let id_str     = encode_uuid(profile_id);
    let doc        = encode_profile(profile)?;
    let now        = encode_dt(Utc::now());

    let updated = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE profiles SET document = ?1, updated_at = ?2 WHERE profile_id = ?3",
          rusqlite::params![doc, now, id_str],
        )?)
      })
      .await?;

    if updated == 0 {
      return Err(Error::ProfileNotFound(profile_id));
    }
    Ok(())
  }

  async fn delete_profile(&self, user_id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(user_id);
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM profiles WHERE user_id = ?1", rusqlite::params![id_str])?)
      })
      .await?;
    Ok(removed > 0)
  }

  // ── Posts ─────────────────────────────────────────────────────────────────

  async fn create_post(&self, input: NewPost) -> Result<Post> {
    let post = Post {
      id:       Uuid::new_v4(),
      user_id:  input.user_id,
      text:     input.text,
      author:   input.author,
      likes:    Vec::new(),
      comments: Vec::new(),
      date:     Utc::now(),
    };

    let id_str   = encode_uuid(post.id);
    let user_str = encode_uuid(post.user_id);
    let at_str   = encode_dt(post.date);
    let doc      = encode_post(&post)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO posts (post_id, user_id, created_at, document) VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, user_str, at_str, doc],
        )?;
        Ok(())
      })
      .await?;

    Ok(post)
  }

  async fn get_post(&self, id: Uuid) -> Result<Option<Post>> {
    let id_str = encode_uuid(id);
    let doc: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT document FROM posts WHERE post_id = ?1",
            rusqlite::params![id_str],
            |r| r.get(0),
          )
          .optional()?)
      })
      .await?;

    doc.as_deref().map(decode_post).transpose()
  }

  async fn list_posts(&self) -> Result<Vec<Post>> {
    let docs: Vec<String> = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT document FROM posts ORDER BY created_at DESC, rowid DESC")?;
        let rows = stmt
          .query_map([], |r| r.get(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    docs.iter().map(String::as_str).map(decode_post).collect()
  }

  async fn save_post(&self, post: &Post) -> Result<()> {
    let post_id = post.id;
    let id_str  = encode_uuid(post_id);
    let doc     = encode_post(post)?;

    let updated = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE posts SET document = ?1 WHERE post_id = ?2",
          rusqlite::params![doc, id_str],
        )?)
      })
      .await?;

    if updated == 0 {
      return Err(Error::PostNotFound(post_id));
    }
    Ok(())
  }

  async fn delete_post(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM posts WHERE post_id = ?1", rusqlite::params![id_str])?)
      })
      .await?;
    Ok(removed > 0)
  }
}
