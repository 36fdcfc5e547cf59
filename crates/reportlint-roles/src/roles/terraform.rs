//! Terraform plan reviews.
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{RoleHint, find_section, parse, utils::compile};

use crate::{
  result::{Level, Report, ValidationResult},
  rules::{RuleSet, SectionGroup, VerdictPolicy},
};

pub const RULES: RuleSet = RuleSet {
  verdict:        VerdictPolicy::Required,
  hint:           Some(RoleHint::Terraform),
  sections:       &[
    SectionGroup::required(&["Summary", "Executive Summary", "Overview"]),
    SectionGroup::required(&[
      "Cost Impact",
      "Cost Analysis",
      "Cost",
      "Cost Estimate",
    ]),
    SectionGroup::optional(&[
      "Destructive Actions",
      "Destructive Changes",
      "Resource Inventory",
    ]),
    SectionGroup::optional(&[
      "Security Concerns",
      "Security Findings",
      "Security",
      "Risk Assessment",
    ]),
    SectionGroup::optional(&[
      "Best Practice Violations",
      "Best Practices",
      "Compliance",
    ]),
    SectionGroup::optional(&[
      "Findings Detail",
      "Findings",
      "Critical Findings",
      "Required Actions",
    ]),
  ],
  finding_fields: &["Resource", "Risk", "Description", "Recommendation"],
  field_level:    Level::Warning,
};

static ESTIMATED_MONTHLY_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)\*\*Estimated Monthly (Change|Cost)"));
static MONTHLY_COST_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)Est\.\s*Cost|monthly\s*(cost|impact|change)")
});

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();
  RULES.check(&doc, &mut report);

  let cost = ["Cost Impact", "Cost Analysis", "Cost"]
    .iter()
    .find_map(|name| find_section(&doc.sections, name));
  if let Some(cost) = cost {
    let content = cost.full_content();
    report.warn_unless(
      ESTIMATED_MONTHLY_RE.is_match(&content)
        || ESTIMATED_MONTHLY_RE.is_match(text)
        || MONTHLY_COST_RE.is_match(&content),
      "Cost section does not contain estimated monthly cost/change information",
    );
  }

  report.finish()
}
