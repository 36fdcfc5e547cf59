//! Performance reviews.
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{RoleHint, parse, utils::compile};

use crate::{
  result::{Level, Report, ValidationResult},
  rules::{RuleSet, SectionGroup, VerdictPolicy, table_under},
};

pub const RULES: RuleSet = RuleSet {
  verdict:        VerdictPolicy::NotRequired,
  hint:           Some(RoleHint::Performance),
  sections:       &[
    SectionGroup::expected(&[
      "Summary",
      "Executive Summary",
      "Overview",
      "Performance Summary",
    ]),
    SectionGroup::expected(&["Performance Budget", "Budget", "Budget Status"]),
    SectionGroup::expected(&[
      "Findings",
      "Performance Findings",
      "Issues",
      "Analysis",
    ]),
    SectionGroup::expected(&[
      "Optimization Opportunities",
      "Optimizations",
      "Recommendations",
      "Priority Matrix",
    ]),
  ],
  finding_fields: &["Category", "Impact", "Location", "Remediation"],
  field_level:    Level::Warning,
};

static QUANTIFIED_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)\d+\s*(ms|KB|MB|GB|s|queries|%|bytes)")
});

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();
  RULES.check(&doc, &mut report);

  if let Some(table) = table_under(&doc.tables, &["budget", "performance"]) {
    report.warn_unless(
      table.has_column(&["metric", "measure"]),
      "Performance budget table missing Metric column",
    );
    report.warn_unless(
      table.has_column(&["status", "pass", "result"]),
      "Performance budget table missing Status column",
    );
  }

  for finding in doc.findings.iter().filter(|f| !f.fields.is_empty()) {
    let impact = finding
      .field("Impact")
      .filter(|v| !v.is_empty())
      .or_else(|| finding.field("Expected Improvement"))
      .unwrap_or_default();
    if !QUANTIFIED_RE.is_match(impact) {
      report.warning(format!(
        "Finding \"{}\" impact should be quantified with specific units (ms, \
         KB, queries, etc.)",
        finding.title
      ));
    }
  }

  report.finish()
}
