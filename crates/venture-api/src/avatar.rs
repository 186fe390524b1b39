//! Gravatar URL derivation.
//!
//! The avatar is a pure function of the email: trimmed, lower-cased, SHA-256
//! hashed and hex encoded, with fixed size/rating/default parameters.

use sha2::{Digest, Sha256};

/// Avatar URL for `email`.
pub fn gravatar_url(email: &str) -> String {
  let normalized = email.trim().to_lowercase();
  let hash = Sha256::digest(normalized.as_bytes());
  format!("https://www.gravatar.com/avatar/{}?s=200&r=pg&d=mm", hex::encode(hash))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalizes_before_hashing() {
    assert_eq!(gravatar_url("  Ada@Example.com "), gravatar_url("ada@example.com"));
  }

  #[test]
  fn known_digest() {
    // sha256("test@example.com")
    assert_eq!(
      gravatar_url("test@example.com"),
      "https://www.gravatar.com/avatar/\
       973dfe463ec85785f5f95af5ba3906eedb2d931c24e69824a89ea65dba4e813b\
       ?s=200&r=pg&d=mm"
    );
  }
}
