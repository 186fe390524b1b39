//! SQL schema for the Venture SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id       TEXT PRIMARY KEY,
    first_name    TEXT NOT NULL,
    last_name     TEXT NOT NULL,
    email         TEXT NOT NULL UNIQUE COLLATE NOCASE,
    password_hash TEXT NOT NULL,
    avatar        TEXT NOT NULL,
    created_at    TEXT NOT NULL    -- RFC 3339 UTC, fixed microsecond width
);

-- One profile document per user; removed together with its user.
CREATE TABLE IF NOT EXISTS profiles (
    profile_id  TEXT PRIMARY KEY,
    user_id     TEXT NOT NULL UNIQUE REFERENCES users(user_id) ON DELETE CASCADE,
    document    TEXT NOT NULL,     -- JSON-encoded Profile
    updated_at  TEXT NOT NULL
);

-- Posts outlive their author, so user_id carries no foreign key.
CREATE TABLE IF NOT EXISTS posts (
    post_id     TEXT PRIMARY KEY,
    user_id     TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    document    TEXT NOT NULL      -- JSON-encoded Post, likes and comments embedded
);

CREATE INDEX IF NOT EXISTS posts_created_idx ON posts(created_at);

PRAGMA user_version = 1;
";
