//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed microsecond width so
//! that lexical order matches chronological order. Documents are compact JSON.
//! UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;
use venture_core::{
  post::Post,
  profile::{Profile, ProfileView},
  user::{User, UserSummary},
};

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Documents ───────────────────────────────────────────────────────────────

pub fn encode_profile(p: &Profile) -> Result<String> { Ok(serde_json::to_string(p)?) }

pub fn encode_post(p: &Post) -> Result<String> { Ok(serde_json::to_string(p)?) }

pub fn decode_post(s: &str) -> Result<Post> { Ok(serde_json::from_str(s)?) }

pub fn decode_profile(s: &str) -> Result<Profile> { Ok(serde_json::from_str(s)?) }

/// Carry a JSON failure out of a `tokio_rusqlite` closure.
pub fn json_in_call(e: serde_json::Error) -> tokio_rusqlite::Error {
  tokio_rusqlite::Error::Other(Box::new(e))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `users` row.
pub struct RawUser {
  pub user_id:       String,
  pub first_name:    String,
  pub last_name:     String,
  pub email:         String,
  pub password_hash: String,
  pub avatar:        String,
  pub created_at:    String,
}

/// Column list matching the field order of [`RawUser::from_row`].
pub const USER_COLUMNS: &str =
  "user_id, first_name, last_name, email, password_hash, avatar, created_at";

impl RawUser {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawUser {
      user_id:       row.get(0)?,
      first_name:    row.get(1)?,
      last_name:     row.get(2)?,
      email:         row.get(3)?,
      password_hash: row.get(4)?,
      avatar:        row.get(5)?,
      created_at:    row.get(6)?,
    })
  }

  pub fn into_user(self) -> Result<User> {
    Ok(User {
      id:            decode_uuid(&self.user_id)?,
      first_name:    self.first_name,
      last_name:     self.last_name,
      email:         self.email,
      password_hash: self.password_hash,
      avatar:        self.avatar,
      date:          decode_dt(&self.created_at)?,
    })
  }
}

/// A profile document joined with its owner's display columns.
pub struct RawProfileView {
  pub document:   String,
  pub user_id:    String,
  pub first_name: String,
  pub last_name:  String,
  pub avatar:     String,
}

/// The join shared by every profile-view query.
pub const PROFILE_VIEW_SELECT: &str =
  "SELECT p.document, u.user_id, u.first_name, u.last_name, u.avatar
   FROM profiles p
   JOIN users u ON u.user_id = p.user_id";

impl RawProfileView {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawProfileView {
      document:   row.get(0)?,
      user_id:    row.get(1)?,
      first_name: row.get(2)?,
      last_name:  row.get(3)?,
      avatar:     row.get(4)?,
    })
  }

  pub fn into_view(self) -> Result<ProfileView> {
    Ok(ProfileView {
      user:    UserSummary {
        id:         decode_uuid(&self.user_id)?,
        first_name: self.first_name,
        last_name:  self.last_name,
        avatar:     self.avatar,
      },
      profile: decode_profile(&self.document)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn timestamps_sort_lexically() {
    let early = Utc.timestamp_opt(1_700_000_000, 5_000).unwrap();
    let late  = Utc.timestamp_opt(1_700_000_000, 120_000_000).unwrap();
    let (a, b) = (encode_dt(early), encode_dt(late));
    assert_eq!(a.len(), b.len());
    assert!(a < b);
    assert_eq!(decode_dt(&a).unwrap(), early);
  }
}
