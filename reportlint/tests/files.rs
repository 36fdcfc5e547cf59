#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
//! File discovery, snapshot selection and parallel validation.
use std::{fs, path::Path};

use reportlint::utils::{
  collect_markdown_files,
  snapshot_jobs,
  snapshots::{list_snapshots, snapshot_path},
  validate_files,
};
use reportlint_roles::Role;
use tempfile::TempDir;

const SRE_OUTPUT: &str = "## Production Readiness: READY\n\n### SLO Coverage\n\n| \
                          Journey | SLI | Target |\n|---|---|---|\n| Login | \
                          latency | 99% |\n";

fn write(dir: &Path, name: &str, text: &str) {
  let path = dir.join(name);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).expect("create parent");
  }
  fs::write(path, text).expect("write file");
}

#[test]
fn test_collect_walks_directories_for_markdown() {
  let tmp = TempDir::new().expect("temp dir");
  write(tmp.path(), "b.md", "# B");
  write(tmp.path(), "nested/a.md", "# A");
  write(tmp.path(), "notes.txt", "not markdown");

  let files =
    collect_markdown_files(&[tmp.path().to_path_buf()]).expect("collects");
  let names: Vec<_> = files
    .iter()
    .map(|p| p.strip_prefix(tmp.path()).expect("inside temp dir"))
    .collect();
  assert_eq!(names, [Path::new("b.md"), Path::new("nested/a.md")]);
}

#[test]
fn test_collect_keeps_explicit_files_and_dedups() {
  let tmp = TempDir::new().expect("temp dir");
  write(tmp.path(), "report.txt", "text");
  let file = tmp.path().join("report.txt");

  let files = collect_markdown_files(&[file.clone(), file.clone()])
    .expect("collects");
  assert_eq!(files, vec![file]);
}

#[test]
fn test_collect_rejects_missing_paths() {
  let tmp = TempDir::new().expect("temp dir");
  let missing = tmp.path().join("nope.md");
  assert!(collect_markdown_files(&[missing]).is_err());
}

#[test]
fn test_validate_files_keeps_input_order() {
  let tmp = TempDir::new().expect("temp dir");
  let mut work = Vec::new();
  for i in 0..12 {
    let name = format!("{i:02}.md");
    let text = if i % 2 == 0 { SRE_OUTPUT } else { "## Summary\n" };
    write(tmp.path(), &name, text);
    work.push((tmp.path().join(name), Role::SreAgent));
  }

  let reports = validate_files(&work, Some(3)).expect("validates");
  assert_eq!(reports.len(), work.len());
  for (report, (path, _)) in reports.iter().zip(&work) {
    assert_eq!(&report.path, path);
    assert!(report.result.valid);
  }
  assert!(!reports[0].result.has_warning("Missing readiness verdict"));
  assert!(reports[1].result.has_warning("Missing readiness verdict"));
  assert!(reports[1].passes(false));
  assert!(!reports[1].passes(true));
}

#[test]
fn test_validate_files_reports_unreadable_file() {
  let tmp = TempDir::new().expect("temp dir");
  let work = [(tmp.path().join("gone.md"), Role::SreAgent)];
  assert!(validate_files(&work, Some(1)).is_err());
}

#[test]
fn test_snapshots_listed_and_filtered() {
  let tmp = TempDir::new().expect("temp dir");
  let dir = tmp.path();
  for (role, fixture) in [
    ("sre-agent", "services/api.md"),
    ("security-reviewer", "auth.md"),
    ("wizard", "spells.md"),
  ] {
    fs::write(snapshot_path(dir, role, fixture), SRE_OUTPUT).expect("write");
  }
  write(dir, "README.md", "not a snapshot");

  let stored = list_snapshots(dir).expect("lists");
  assert_eq!(stored.len(), 3);
  assert!(
    stored
      .iter()
      .any(|s| s.role == "sre-agent" && s.fixture == "services/api")
  );

  // Unknown role prefixes are skipped
  let all = snapshot_jobs(&stored, None, &[]);
  assert_eq!(all.len(), 2);

  let only = snapshot_jobs(&stored, Some(Role::SreAgent), &[]);
  assert_eq!(only.len(), 1);
  assert_eq!(only[0].1, Role::SreAgent);

  let allowed = snapshot_jobs(&stored, None, &[Role::SecurityReviewer]);
  assert_eq!(allowed.len(), 1);
  assert_eq!(allowed[0].1, Role::SecurityReviewer);

  // An explicit role wins over the configured list
  let both = snapshot_jobs(&stored, Some(Role::SreAgent), &[Role::SecurityReviewer]);
  assert_eq!(both.len(), 1);
  assert_eq!(both[0].1, Role::SreAgent);
}

#[test]
fn test_missing_snapshot_dir_is_an_error() {
  let tmp = TempDir::new().expect("temp dir");
  let err = list_snapshots(&tmp.path().join("absent")).expect_err("missing dir");
  assert!(err.to_string().starts_with("Snapshot error in"));
}
