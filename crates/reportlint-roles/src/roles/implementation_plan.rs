//! Implementation plans.
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{Table, find_section, parse, utils::compile};

use crate::{
  result::{Report, ValidationResult},
  rules::table_under,
};

const REQUIRED_SECTIONS: &[&str] = &["Overview", "Decisions", "Open Questions"];
const DECISIONS_COLUMNS: &[&str] = &["#", "Decision", "Context", "Rationale"];
const QUESTIONS_COLUMNS: &[&str] = &["#", "Question", "Impact", "Status"];
const TASK_COLUMNS: &[&str] = &["#", "Task", "Complexity", "Dependencies", "Status"];
const COMPLEXITIES: &[&str] = &["S", "M", "L"];

static TOP_HEADING_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?m)^#\s+Implementation Plan:"));
static PHASE_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?m)^##\s+Phase\s+\d+"));
static MILESTONE_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?m)^###\s+Milestone\s+\d+\.\d+"));

/// Columns from `expected` that no header of `table` contains.
fn missing_columns<'a>(table: &Table, expected: &[&'a str]) -> Vec<&'a str> {
  expected
    .iter()
    .copied()
    .filter(|column| table.column_index(column).is_none())
    .collect()
}

fn check_task_table(table: &Table, report: &mut Report) {
  let title = &table.section_title;
  for column in missing_columns(table, TASK_COLUMNS) {
    report.error(format!(
      "Task table in \"{title}\" missing column: \"{column}\""
    ));
  }

  let Some(idx) = table.column_index("complexity") else {
    return;
  };
  for row in &table.rows {
    let value = row.get(idx).map_or("", |v| v.trim());
    if !value.is_empty() && !COMPLEXITIES.contains(&value) {
      report.warning(format!(
        "Task table in \"{title}\": invalid complexity \"{value}\" (expected \
         S, M, or L)"
      ));
    }
  }
}

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();

  report.error_unless(
    TOP_HEADING_RE.is_match(text),
    "Missing top heading: expected \"# Implementation Plan: [Product Name]\"",
  );

  for name in REQUIRED_SECTIONS {
    report.error_unless(
      find_section(&doc.sections, name).is_some(),
      format!("Missing required section: \"{name}\""),
    );
  }

  report.error_unless(
    PHASE_RE.is_match(text),
    "Missing Phase section: expected at least one \"## Phase N: [Name]\"",
  );
  report.error_unless(
    MILESTONE_RE.is_match(text),
    "Missing Milestone section: expected at least one \"### Milestone N.N: \
     [Name]\"",
  );

  match table_under(&doc.tables, &["decisions"]) {
    Some(table) => {
      for column in missing_columns(table, DECISIONS_COLUMNS) {
        report.error(format!("Decisions table missing column: \"{column}\""));
      }
    },
    None => report.warning("No table found in Decisions section"),
  }

  match table_under(&doc.tables, &["open questions"]) {
    Some(table) => {
      for column in missing_columns(table, QUESTIONS_COLUMNS) {
        report.error(format!(
          "Open Questions table missing column: \"{column}\""
        ));
      }
    },
    None => report.warning("No table found in Open Questions section"),
  }

  for table in doc
    .tables
    .iter()
    .filter(|t| t.section_title.to_lowercase().contains("milestone"))
  {
    check_task_table(table, &mut report);
  }

  for callout in ["**Parallelizable:**", "**Milestone Value:**"] {
    report.warn_unless(
      text.contains(callout),
      format!(
        "Missing \"{callout}\" callout (should be present in each milestone)"
      ),
    );
  }

  report.finish()
}
