pub mod output;
pub mod snapshots;

use std::path::{Path, PathBuf};

use log::{debug, warn};
use rayon::prelude::*;
use reportlint_roles::Role;
use walkdir::WalkDir;

use crate::{
  error::ReportlintError,
  utils::{output::FileReport, snapshots::Snapshot},
};

/// Expand `paths` into the markdown files to validate. Files are taken as
/// given and directories are searched recursively for `.md` files. The
/// result is sorted and free of duplicates.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn collect_markdown_files(
  paths: &[PathBuf],
) -> Result<Vec<PathBuf>, ReportlintError> {
  let mut files = Vec::new();
  for path in paths {
    if path.is_dir() {
      collect_from_dir(path, &mut files)?;
    } else if path.exists() {
      files.push(path.clone());
    } else {
      return Err(ReportlintError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("No such file or directory: {}", path.display()),
      )));
    }
  }
  files.sort();
  files.dedup();
  Ok(files)
}

fn collect_from_dir(
  dir: &Path,
  files: &mut Vec<PathBuf>,
) -> Result<(), ReportlintError> {
  let mut walker = WalkDir::new(dir).follow_links(true).into_iter().peekable();

  // The first entry fails when the directory itself cannot be opened
  if matches!(walker.peek(), Some(Err(_)))
    && let Some(Err(e)) = walker.next()
  {
    return Err(e.into());
  }

  for entry in walker {
    let entry = match entry {
      Ok(entry) => entry,
      Err(e) => {
        warn!("Skipping unreadable directory entry: {e}");
        continue;
      },
    };
    if entry.file_type().is_file()
      && entry.path().extension().and_then(|e| e.to_str()) == Some("md")
    {
      files.push(entry.into_path());
    }
  }
  Ok(())
}

/// A file to validate and the role whose rules apply to it.
pub type Job = (PathBuf, Role);

/// Validate every job on a pool of `jobs` threads (all cores when `None`).
/// Reports come back in the order of `work`.
///
/// # Errors
///
/// Returns an error if the pool cannot be built or a file cannot be read.
pub fn validate_files(
  work: &[Job],
  jobs: Option<usize>,
) -> Result<Vec<FileReport>, ReportlintError> {
  let threads = jobs.unwrap_or_else(num_cpus::get);
  debug!("Validating {} file(s) on {threads} thread(s)", work.len());

  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(threads)
    .build()?;

  pool.install(|| {
    work
      .par_iter()
      .map(|(path, role)| validate_file(path, *role))
      .collect()
  })
}

/// Validate a single file.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn validate_file(
  path: &Path,
  role: Role,
) -> Result<FileReport, ReportlintError> {
  let text = std::fs::read_to_string(path).map_err(|e| {
    std::io::Error::new(
      e.kind(),
      format!("Failed to read {}: {e}", path.display()),
    )
  })?;
  Ok(FileReport {
    path: path.to_path_buf(),
    role,
    result: role.validate(&text),
  })
}

/// Pair snapshots with their roles, keeping those that pass the filters.
///
/// `only` restricts the run to one role. Otherwise a non-empty `allowed`
/// list restricts it to the roles named there. Snapshots whose prefix is not
/// a known role are skipped with a warning.
#[must_use]
pub fn snapshot_jobs(
  snapshots: &[Snapshot],
  only: Option<Role>,
  allowed: &[Role],
) -> Vec<Job> {
  snapshots
    .iter()
    .filter_map(|snapshot| {
      let Ok(role) = snapshot.role.parse::<Role>() else {
        warn!(
          "Skipping snapshot {} with unknown role '{}'",
          snapshot.path.display(),
          snapshot.role
        );
        return None;
      };
      let selected = match only {
        Some(only) => role == only,
        None => allowed.is_empty() || allowed.contains(&role),
      };
      selected.then(|| (snapshot.path.clone(), role))
    })
    .collect()
}
