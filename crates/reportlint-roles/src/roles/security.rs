//! Security reviews.
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{RoleHint, parse, utils::compile};

use crate::{
  result::{Level, Report, ValidationResult},
  rules::{RuleSet, SectionGroup, VerdictPolicy},
};

pub const RULES: RuleSet = RuleSet {
  verdict:        VerdictPolicy::Required,
  hint:           Some(RoleHint::Security),
  sections:       &[
    SectionGroup::expected(&[
      "Summary",
      "Executive Summary",
      "Overview",
      "What's Done Well",
    ]),
    SectionGroup::expected(&["Findings", "Critical Findings", "Security Findings"]),
    SectionGroup::expected(&["Secrets Scan", "Secrets", "Credential Scan"]),
    SectionGroup::expected(&["Dependency Audit", "Dependencies", "Supply Chain"]),
    SectionGroup::expected(&[
      "Recommendations",
      "Required Actions",
      "Priority Summary",
      "Next Steps",
      "The Fix",
    ]),
  ],
  finding_fields: &[
    "CWE",
    "Category",
    "Risk",
    "Location",
    "Description",
    "Proof",
    "Remediation",
    "References",
  ],
  field_level:    Level::Warning,
};

static REFERENCE_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"CWE-\d+|OWASP|A\d{2}:\d{4}"));

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();
  RULES.check(&doc, &mut report);

  // A reference anywhere in the report covers every finding
  if !REFERENCE_RE.is_match(text) {
    for finding in doc.findings.iter().filter(|f| f.cwe_reference.is_none()) {
      report.warning(format!(
        "Finding \"{}\" missing CWE/OWASP reference",
        finding.title
      ));
    }
  }

  report.finish()
}
