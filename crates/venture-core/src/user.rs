//! The user record: credentials behind every profile and post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. Carries the password hash, so it is never returned
/// over the wire directly; see [`PublicUser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  pub id:            Uuid,
  pub first_name:    String,
  pub last_name:     String,
  /// Unique across all users, compared case-insensitively.
  pub email:         String,
  /// bcrypt hash including its salt and cost.
  pub password_hash: String,
  pub avatar:        String,
  pub date:          DateTime<Utc>,
}

/// Input to [`crate::store::NetworkStore::create_user`].
/// `id` and `date` are always assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub first_name:    String,
  pub last_name:     String,
  pub email:         String,
  pub password_hash: String,
  pub avatar:        String,
}

/// Every user field except the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
  pub id:         Uuid,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub avatar:     String,
  pub date:       DateTime<Utc>,
}

impl From<User> for PublicUser {
  fn from(u: User) -> Self {
    PublicUser {
      id:         u.id,
      first_name: u.first_name,
      last_name:  u.last_name,
      email:      u.email,
      avatar:     u.avatar,
      date:       u.date,
    }
  }
}

/// Display fields joined into profile reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
  pub id:         Uuid,
  pub first_name: String,
  pub last_name:  String,
  pub avatar:     String,
}

/// Author fields copied into a post or comment when it is written.
/// Later changes to the user are not reflected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSnapshot {
  pub first_name: String,
  pub last_name:  String,
  pub avatar:     String,
}

impl User {
  pub fn summary(&self) -> UserSummary {
    UserSummary {
      id:         self.id,
      first_name: self.first_name.clone(),
      last_name:  self.last_name.clone(),
      avatar:     self.avatar.clone(),
    }
  }

  pub fn snapshot(&self) -> AuthorSnapshot {
    AuthorSnapshot {
      first_name: self.first_name.clone(),
      last_name:  self.last_name.clone(),
      avatar:     self.avatar.clone(),
    }
  }
}
