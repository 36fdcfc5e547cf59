//! Peer review feedback on implementation plans.
//!
//! The strictest format: missing fields on a finding are errors.
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{find_section, parse, utils::compile};

use crate::{
  result::{Level, Report, ValidationResult},
  rules::{RuleSet, SectionGroup},
};

pub const RULES: RuleSet = RuleSet {
  sections: &[
    SectionGroup::required(&["Findings"]),
    SectionGroup::required(&["Summary"]),
  ],
  finding_fields: &["Section", "Issue", "Suggestion"],
  field_level: Level::Error,
  ..RuleSet::EMPTY
};

static REVIEW_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?m)^##\s+Implementation Plan Review\s+[—–-]\s+(.+)$")
});

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();

  report.error_unless(
    REVIEW_HEADING_RE.is_match(text),
    "Missing heading: expected \"## Implementation Plan Review — [Reviewer \
     Role]\"",
  );

  RULES.check(&doc, &mut report);

  if let Some(summary) = find_section(&doc.sections, "Summary") {
    report.error_unless(
      !summary.content.trim().is_empty(),
      "Summary section is empty (must contain overall assessment)",
    );
  }

  report.finish()
}
