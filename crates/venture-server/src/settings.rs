//! Runtime configuration, layered from an optional TOML file and
//! `VENTURE_`-prefixed environment variables.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use serde::Deserialize;
use venture_api::{ApiConfig, DEFAULT_BCRYPT_COST, token::DEFAULT_TTL_SECS};

pub const ENV_PREFIX: &str = "VENTURE";

/// Server configuration, deserialised from `config.toml` and the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:           String,
  #[serde(default = "default_port")]
  pub port:           u16,
  #[serde(default = "default_store_path")]
  pub store_path:     PathBuf,
  pub jwt_secret:     String,
  #[serde(default = "default_token_ttl")]
  pub token_ttl_secs: u64,
  #[serde(default = "default_bcrypt_cost")]
  pub bcrypt_cost:    u32,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }
fn default_store_path() -> PathBuf { PathBuf::from("venture.db") }
fn default_token_ttl() -> u64 { DEFAULT_TTL_SECS }
fn default_bcrypt_cost() -> u32 { DEFAULT_BCRYPT_COST }

impl ServerConfig {
  /// Read `file` if it exists, then let `VENTURE_*` variables override it.
  pub fn load(file: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix(ENV_PREFIX))
      .build()
      .context("failed to read config file")?;
    Self::from_settings(settings)
  }

  fn from_settings(settings: config::Config) -> anyhow::Result<Self> {
    let cfg: ServerConfig = settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")?;
    if cfg.jwt_secret.trim().is_empty() {
      bail!("jwt_secret must not be empty");
    }
    Ok(cfg)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn api_config(&self) -> anyhow::Result<ApiConfig> {
    ApiConfig::new(self.bcrypt_cost).context("invalid bcrypt_cost")
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
