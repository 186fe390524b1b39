//! Core types and trait definitions for the Venture network.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod post;
pub mod profile;
pub mod store;
pub mod user;

pub use error::{Error, Result};
