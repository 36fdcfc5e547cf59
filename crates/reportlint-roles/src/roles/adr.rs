//! Architecture decision records.
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{parse, utils::compile};

use crate::{
  result::{Report, ValidationResult},
  rules::{check_ordering, has_any_section, table_under},
};

const ADR_SECTIONS: &[&[&str]] = &[
  &["Status"],
  &["Context"],
  &["Decision"],
  &["Consequences"],
  &["Alternatives Considered", "Alternatives"],
];

static ADR_HEADING_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?m)^#\s+ADR-\d+"));

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();

  report.error_unless(
    ADR_HEADING_RE.is_match(text),
    "Missing ADR heading: expected \"# ADR-NNN: [Title]\"",
  );

  for aliases in ADR_SECTIONS {
    report.error_unless(
      has_any_section(&doc, aliases),
      format!("Missing required ADR section: one of [{}]", aliases.join(", ")),
    );
  }

  if let Some(table) = table_under(&doc.tables, &["alternative"]) {
    report.warn_unless(
      table.rows.len() >= 2,
      "ADR should have at least 2 alternatives considered",
    );
  }

  check_ordering(&doc, &mut report);
  report.finish()
}
