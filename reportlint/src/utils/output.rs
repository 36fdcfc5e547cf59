//! Rendering validation reports.
use std::{fmt::Write, path::PathBuf};

use reportlint_roles::{Role, ValidationResult};
use serde::Serialize;

use crate::error::ReportlintError;

/// The outcome of validating one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
  pub path:   PathBuf,
  pub role:   Role,
  #[serde(flatten)]
  pub result: ValidationResult,
}

impl FileReport {
  #[must_use]
  pub fn passes(&self, strict: bool) -> bool {
    self.result.passes(strict)
  }
}

/// Counts over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
  pub files:    usize,
  pub failed:   usize,
  pub errors:   usize,
  pub warnings: usize,
}

impl Summary {
  #[must_use]
  pub fn of(reports: &[FileReport], strict: bool) -> Self {
    reports.iter().fold(Self::default(), |mut acc, report| {
      acc.files += 1;
      acc.errors += report.result.errors.len();
      acc.warnings += report.result.warnings.len();
      if !report.passes(strict) {
        acc.failed += 1;
      }
      acc
    })
  }
}

/// Human-readable report, one block per file and a closing summary line.
#[must_use]
pub fn render_text(reports: &[FileReport], strict: bool) -> String {
  let mut out = String::new();
  for report in reports {
    let status = if report.passes(strict) { "ok" } else { "FAILED" };
    let _ = writeln!(
      out,
      "{} [{}] {status}",
      report.path.display(),
      report.role
    );
    for error in &report.result.errors {
      let _ = writeln!(out, "  error: {error}");
    }
    for warning in &report.result.warnings {
      let _ = writeln!(out, "  warning: {warning}");
    }
  }

  let summary = Summary::of(reports, strict);
  let _ = writeln!(
    out,
    "\n{} file(s) checked, {} failed ({} error(s), {} warning(s))",
    summary.files, summary.failed, summary.errors, summary.warnings
  );
  out
}

#[derive(Serialize)]
struct JsonReport<'a> {
  strict:  bool,
  summary: Summary,
  files:   &'a [FileReport],
}

/// Machine-readable report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(
  reports: &[FileReport],
  strict: bool,
) -> Result<String, ReportlintError> {
  let report = JsonReport {
    strict,
    summary: Summary::of(reports, strict),
    files: reports,
  };
  Ok(serde_json::to_string_pretty(&report)?)
}
