//! Architect plan reviews.
//!
//! The architect also writes ADRs, which have their own validator in
//! [`super::adr`]. A plan review that looks like neither only draws a
//! warning.
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{parse, utils::compile};

use crate::{
  result::{Level, Report, ValidationResult},
  rules::{RuleSet, SectionGroup, VerdictPolicy},
};

pub const RULES: RuleSet = RuleSet {
  verdict:        VerdictPolicy::NotRequired,
  hint:           None,
  sections:       &[
    SectionGroup::expected(&[
      "Summary",
      "Executive Summary",
      "Overview",
      "Architectural Assessment",
    ]),
    SectionGroup::expected(&[
      "Findings",
      "Architectural Findings",
      "Review Findings",
      "Issues",
    ]),
  ],
  finding_fields: &["Section", "Issue", "Suggestion"],
  field_level:    Level::Warning,
};

static REVIEW_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)implementation plan review.*architect|architect.*review")
});
static ADR_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?m)^#\s+ADR-\d+|(?i:architecture decision record)")
});

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();

  if doc.verdict.is_none() && !REVIEW_HEADING_RE.is_match(text) && !ADR_RE.is_match(text) {
    report.warning(
      "Could not detect plan review heading or verdict (output may not be a \
       standard plan review or ADR)",
    );
  }
  RULES.check(&doc, &mut report);

  report.finish()
}
