//! SRE production readiness reviews.
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{RoleHint, parse, utils::compile};

use crate::{
  result::{Level, Report, ValidationResult},
  rules::{RuleSet, SectionGroup, VerdictPolicy, table_under},
};

pub const RULES: RuleSet = RuleSet {
  verdict:        VerdictPolicy::NotRequired,
  hint:           Some(RoleHint::Reliability),
  sections:       &[
    SectionGroup::expected(&[
      "Summary",
      "Executive Summary",
      "Overview",
      "Reliability Summary",
    ]),
    SectionGroup::expected(&["SLO Coverage", "SLOs", "Service Level Objectives"]),
    SectionGroup::expected(&["Findings", "Reliability Findings", "Issues"]),
    SectionGroup::expected(&[
      "Observability Assessment",
      "Observability",
      "Monitoring",
    ]),
    SectionGroup::expected(&[
      "Deployment Assessment",
      "Deployment",
      "Deployment Strategy",
    ]),
    SectionGroup::expected(&[
      "Runbook Coverage",
      "Runbooks",
      "Operational Readiness",
    ]),
    SectionGroup::expected(&["Recommendations", "Priority Actions", "Next Steps"]),
  ],
  finding_fields: &["Category", "Risk", "Recommendation"],
  field_level:    Level::Warning,
};

static READINESS_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)\b(READY|NEEDS WORK|NOT READY)\b"));

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();

  report.warn_unless(
    READINESS_RE.is_match(text) || doc.verdict.is_some(),
    "Missing readiness verdict: expected READY, NEEDS WORK, or NOT READY (or \
     standard PASS/WARN/FAIL)",
  );

  RULES.check(&doc, &mut report);

  if let Some(table) = table_under(&doc.tables, &["slo", "service level"]) {
    report.warn_unless(
      table.has_column(&["journey", "sli", "service"]),
      "SLO Coverage table missing Journey/SLI column",
    );
  }

  if let Some(table) = table_under(&doc.tables, &["observability", "monitoring"]) {
    report.warn_unless(
      table.has_column(&["signal", "type", "category"]),
      "Observability assessment table missing Signal/Type column",
    );
  }

  report.finish()
}
