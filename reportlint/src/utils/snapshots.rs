//! Naming of stored role outputs.
//!
//! A snapshot of `role` run against `fixture` lives at
//! `{dir}/{role}--{fixture}.snap.md`, where the fixture path has its
//! separators replaced by `--` and its extension dropped.
use std::{
  fs,
  path::{Path, PathBuf},
};

use log::debug;
use serde::Serialize;

use crate::error::ReportlintError;

pub const SNAPSHOT_SUFFIX: &str = ".snap.md";
const SEPARATOR: &str = "--";

/// One stored snapshot, with its name split back into parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
  /// Role prefix as written in the file name.
  pub role:    String,
  /// Fixture path with `/` separators and no extension.
  pub fixture: String,
  pub path:    PathBuf,
}

/// Flatten a fixture path into the part of a snapshot name after the role.
#[must_use]
pub fn flatten_fixture(fixture: &str) -> String {
  let stem = match fixture.rfind('.') {
    Some(dot) if !fixture[dot..].contains(['/', '\\']) => &fixture[..dot],
    _ => fixture,
  };
  stem.replace(['/', '\\'], SEPARATOR)
}

/// Where the snapshot of `role` run against `fixture` is stored.
#[must_use]
pub fn snapshot_path(dir: &Path, role: &str, fixture: &str) -> PathBuf {
  dir.join(format!(
    "{role}{SEPARATOR}{}{SNAPSHOT_SUFFIX}",
    flatten_fixture(fixture)
  ))
}

/// Split a snapshot file name into role and fixture. Returns `None` for
/// names that are not snapshots.
#[must_use]
pub fn parse_snapshot_name(name: &str) -> Option<(String, String)> {
  let stem = name.strip_suffix(SNAPSHOT_SUFFIX)?;
  let (role, fixture) = stem.split_once(SEPARATOR)?;
  if role.is_empty() || fixture.is_empty() {
    return None;
  }
  Some((role.to_string(), fixture.replace(SEPARATOR, "/")))
}

/// Every snapshot directly inside `dir`, sorted by file name.
///
/// # Errors
///
/// Returns an error if `dir` cannot be read.
pub fn list_snapshots(dir: &Path) -> Result<Vec<Snapshot>, ReportlintError> {
  let entries = fs::read_dir(dir).map_err(|e| {
    ReportlintError::Snapshot {
      path:   dir.to_path_buf(),
      reason: e.to_string(),
    }
  })?;

  let mut snapshots = Vec::new();
  for entry in entries {
    let path = entry?.path();
    if !path.is_file() {
      continue;
    }
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
      continue;
    };
    match parse_snapshot_name(name) {
      Some((role, fixture)) => {
        snapshots.push(Snapshot {
          role,
          fixture,
          path,
        });
      },
      None => debug!("Ignoring non-snapshot file {}", path.display()),
    }
  }

  snapshots.sort_by(|a, b| a.path.cmp(&b.path));
  Ok(snapshots)
}
