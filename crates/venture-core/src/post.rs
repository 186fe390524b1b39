//! Post documents with their embedded likes and comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, user::AuthorSnapshot};

/// One user's like on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
  pub user_id: Uuid,
}

/// A comment embedded in a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
  pub id:      Uuid,
  pub user_id: Uuid,
  pub text:    String,
  #[serde(flatten)]
  pub author:  AuthorSnapshot,
  pub date:    DateTime<Utc>,
}

/// A post in the feed. Author fields are a snapshot taken at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
  pub id:       Uuid,
  pub user_id:  Uuid,
  pub text:     String,
  #[serde(flatten)]
  pub author:   AuthorSnapshot,
  /// Most recent first; at most one entry per user.
  #[serde(default)]
  pub likes:    Vec<Like>,
  /// Most recent first.
  #[serde(default)]
  pub comments: Vec<Comment>,
  pub date:     DateTime<Utc>,
}

/// Input to [`crate::store::NetworkStore::create_post`].
#[derive(Debug, Clone)]
pub struct NewPost {
  pub user_id: Uuid,
  pub text:    String,
  pub author:  AuthorSnapshot,
}

impl Post {
  pub fn is_liked_by(&self, user_id: Uuid) -> bool {
    self.likes.iter().any(|l| l.user_id == user_id)
  }

  /// Record a like from `user_id` at the front of the list.
  pub fn like(&mut self, user_id: Uuid) -> Result<()> {
    if self.is_liked_by(user_id) {
      return Err(Error::AlreadyLiked(user_id));
    }
    self.likes.insert(0, Like { user_id });
    Ok(())
  }

  /// Withdraw the like from `user_id`.
  pub fn unlike(&mut self, user_id: Uuid) -> Result<()> {
    let index = self
      .likes
      .iter()
      .position(|l| l.user_id == user_id)
      .ok_or(Error::NotLiked(user_id))?;
    self.likes.remove(index);
    Ok(())
  }

  /// Insert a new comment at the front of the list and return it.
  pub fn add_comment(
    &mut self,
    user_id: Uuid,
    text: String,
    author: AuthorSnapshot,
  ) -> &Comment {
    self.comments.insert(0, Comment {
      id: Uuid::new_v4(),
      user_id,
      text,
      author,
      date: Utc::now(),
    });
    &self.comments[0]
  }

  /// Remove the comment identified by `comment_id`, provided it was written
  /// by `user_id`.
  ///
  /// `comment_id` is taken as the raw path segment: anything that is not a
  /// well-formed id cannot match a comment and is reported as not found.
  pub fn remove_comment(&mut self, comment_id: &str, user_id: Uuid) -> Result<Comment> {
    let index = Uuid::parse_str(comment_id)
      .ok()
      .and_then(|id| self.comments.iter().position(|c| c.id == id))
      .ok_or_else(|| Error::CommentNotFound(comment_id.to_owned()))?;

    let comment = &self.comments[index];
    if comment.user_id != user_id {
      return Err(Error::NotCommentAuthor {
        comment_id: comment.id,
        user_id,
      });
    }
    Ok(self.comments.remove(index))
  }
}
