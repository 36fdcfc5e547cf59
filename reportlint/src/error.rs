use std::{io, path::PathBuf};

use reportlint_config::ConfigError;
use reportlint_roles::UnknownRole;
use thiserror::Error;

/// Top-level error type for the reportlint front end.
#[derive(Debug, Error)]
pub enum ReportlintError {
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  UnknownRole(#[from] UnknownRole),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("Snapshot error in {}: {reason}", path.display())]
  Snapshot { path: PathBuf, reason: String },

  #[error("Failed to build thread pool: {0}")]
  ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl From<walkdir::Error> for ReportlintError {
  fn from(e: walkdir::Error) -> Self {
    Self::Io(e.into())
  }
}
