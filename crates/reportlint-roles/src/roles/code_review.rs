//! Code reviews.
use reportlint_markdown::{Finding, RoleHint, parse};

use crate::{
  result::{Level, Report, ValidationResult},
  rules::{RuleSet, SectionGroup, VerdictPolicy, has_any_section},
};

const DONE_WELL: &[&str] = &[
  "What's Done Well",
  "Strengths",
  "Positives",
  "Good Patterns",
  "Commendations",
];

pub const RULES: RuleSet = RuleSet {
  verdict:        VerdictPolicy::Required,
  hint:           Some(RoleHint::CodeReview),
  sections:       &[
    SectionGroup::expected(&["Summary", "Executive Summary", "Overview"]),
    SectionGroup::expected(&["Findings", "Code Review Findings", "Issues"]),
    SectionGroup::expected(&[
      "Specification Compliance",
      "Spec Compliance",
      "Specifications",
    ]),
    SectionGroup::expected(&[
      "Convention Compliance",
      "Convention Adherence",
      "Coding Standards",
      "Standards",
    ]),
    SectionGroup::expected(&[
      "Reuse Opportunities",
      "Reuse",
      "Existing Patterns",
      "Duplication",
    ]),
    SectionGroup::expected(DONE_WELL),
    SectionGroup::expected(&[
      "Recommendations",
      "Suggestions",
      "Next Steps",
      "General Recommendations",
    ]),
  ],
  finding_fields: &[
    "Category",
    "Location",
    "Issue",
    "Why this matters",
    "Suggestion",
  ],
  field_level:    Level::Warning,
};

fn explains_itself(finding: &Finding) -> bool {
  finding.fields.keys().any(|key| {
    let key = key.to_lowercase();
    key.contains("why") || key.contains("reason") || key.contains("explanation")
  })
}

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();
  RULES.check(&doc, &mut report);

  report.warn_unless(
    has_any_section(&doc, DONE_WELL),
    "Missing \"What's Done Well\" section (code reviews must call out what \
     the change does well)",
  );

  for finding in &doc.findings {
    if !finding.fields.is_empty() && !explains_itself(finding) {
      report.warning(format!(
        "Finding \"{}\" missing educational context (expected \"Why this \
         matters\" field)",
        finding.title
      ));
    }
  }

  report.finish()
}
