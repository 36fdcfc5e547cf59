//! Design system compliance reviews.
use reportlint_markdown::{RoleHint, parse};

use crate::{
  result::{Level, Report, ValidationResult},
  rules::{RuleSet, SectionGroup, VerdictPolicy, has_any_section, table_under},
};

pub const RULES: RuleSet = RuleSet {
  verdict:        VerdictPolicy::Required,
  hint:           Some(RoleHint::DesignSystem),
  sections:       &[
    SectionGroup::expected(&["Summary", "Overview", "Compliance Summary"]),
    SectionGroup::expected(&[
      "Token Violations",
      "Token Issues",
      "Hardcoded Values",
      "Token Compliance",
    ]),
    SectionGroup::expected(&[
      "Component Usage Issues",
      "Component Issues",
      "Component Compliance",
    ]),
    SectionGroup::expected(&[
      "Accessibility Findings",
      "Accessibility",
      "A11y Findings",
      "WCAG",
    ]),
    SectionGroup::expected(&["Recommendations", "Suggestions", "Next Steps"]),
  ],
  finding_fields: &["Location", "Issue", "Recommendation"],
  field_level:    Level::Warning,
};

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();
  RULES.check(&doc, &mut report);

  if has_any_section(&doc, &["Token Violations", "Token Issues", "Hardcoded Values"])
    && let Some(table) = table_under(&doc.tables, &["token", "hardcoded"])
  {
    report.warn_unless(
      table.has_column(&["location", "file"]),
      "Token violations table missing Location/File column",
    );
  }

  report.finish()
}
