use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading, validating or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// A value or override that parses but is not acceptable.
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Failed to access {}: {source}", path.display())]
  Io { path: PathBuf, source: io::Error },

  #[error("Invalid JSON config {}: {source}", path.display())]
  Serde {
    path:   PathBuf,
    source: serde_json::Error,
  },

  #[error("Invalid TOML config {}: {source}", path.display())]
  Toml {
    path:   PathBuf,
    source: toml::de::Error,
  },
}

impl ConfigError {
  pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
    Self::Io {
      path: path.to_path_buf(),
      source,
    }
  }
}
