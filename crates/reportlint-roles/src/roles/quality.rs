//! Test coverage analyses and test strategies.
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{find_any_section, parse, utils::compile};

use crate::{
  result::{Report, ValidationResult},
  rules::{RuleSet, SectionGroup, table_under},
};

pub const RULES: RuleSet = RuleSet {
  sections: &[
    SectionGroup::expected(&["Summary", "Overview", "Coverage Summary"]),
    SectionGroup::expected(&["Coverage Report", "Coverage", "Coverage Metrics"]),
    SectionGroup::expected(&["Gap Analysis", "Gaps", "Test Gaps", "Uncovered Areas"]),
    SectionGroup::expected(&[
      "Test Quality Assessment",
      "Quality Assessment",
      "Test Quality",
    ]),
    SectionGroup::expected(&[
      "Test Strategy Recommendations",
      "Strategy",
      "Recommendations",
    ]),
  ],
  ..RuleSet::EMPTY
};

static COVERAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)test coverage analysis|coverage report|gap analysis")
});
static STRATEGY_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)test strategy|testing pyramid"));
static PRIORITY_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)P[1-3]|priority|critical|high|medium"));
static PRIORITY_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"P[1-3]"));

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();

  report.warn_unless(
    COVERAGE_RE.is_match(text) || STRATEGY_RE.is_match(text),
    "Output does not appear to be a Coverage Analysis or Test Strategy \
     (expected \"Test Coverage Analysis\" heading or similar)",
  );

  RULES.check(&doc, &mut report);

  if let Some(table) = table_under(&doc.tables, &["coverage", "module"]) {
    report.warn_unless(
      table.has_column(&["module", "component", "file"]),
      "Coverage table missing Module/Component column",
    );
    report.warn_unless(
      table.has_column(&["%", "line", "coverage"]),
      "Coverage table missing coverage percentage column",
    );
  }

  if let Some(gaps) =
    find_any_section(&doc.sections, &["Gap Analysis", "Gaps", "Test Gaps"])
  {
    let prioritised = PRIORITY_RE.is_match(&gaps.content)
      || gaps
        .subsections
        .iter()
        .any(|s| PRIORITY_TITLE_RE.is_match(&s.title));
    report.warn_unless(
      prioritised,
      "Gap Analysis entries should include priority levels (P1/P2/P3)",
    );
  }

  report.finish()
}
