//! Engineering metrics and OKR reports.
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{parse, utils::compile};

use crate::{
  result::{Report, ValidationResult},
  rules::{RuleSet, SectionGroup, table_under},
};

pub const RULES: RuleSet = RuleSet {
  sections: &[
    SectionGroup::expected(&["Period", "Date", "Reporting Period", "Timeframe"]),
    SectionGroup::expected(&[
      "Engineering Effectiveness",
      "DORA",
      "Engineering Metrics",
      "Delivery Metrics",
    ]),
    SectionGroup::expected(&["Key Insights", "Insights", "Analysis", "Observations"]),
    SectionGroup::expected(&[
      "Recommended Action",
      "Recommendations",
      "Action Items",
      "Suggested Action",
    ]),
    SectionGroup::expected(&["Context", "Caveats", "Context & Caveats", "Notes"]),
  ],
  ..RuleSet::EMPTY
};

static METRICS_REPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)metrics report|engineering.*metrics|DORA|engineering effectiveness")
});
static OKR_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)OKR|objective|key result"));
static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)\d+%|\d+\.\d+|\d+\s*(ms|s|hours|days|deploys)")
});
static VANITY_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)lines of code|commit count|story points completed|hours worked")
});
static VANITY_CAVEAT_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)vanity|not correlated|should not be used")
});

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();

  let is_metrics_report = METRICS_REPORT_RE.is_match(text);
  report.warn_unless(
    is_metrics_report || OKR_RE.is_match(text),
    "Output does not appear to be a Metrics Report or OKR Report",
  );

  RULES.check(&doc, &mut report);

  if is_metrics_report
    && let Some(table) =
      table_under(&doc.tables, &["dora", "engineering", "effectiveness", "delivery"])
  {
    report.warn_unless(
      table.has_column(&["metric", "measure"]),
      "DORA metrics table missing Metric column",
    );
    report.warn_unless(
      table.has_column(&["benchmark", "elite", "target"]),
      "DORA metrics table missing Benchmark/Target column",
    );
  }

  report.warn_unless(
    QUANTITY_RE.is_match(text),
    "Report should contain quantitative data (percentages, durations, counts)",
  );

  if VANITY_RE.is_match(text) && !VANITY_CAVEAT_RE.is_match(text) {
    report.warning("Report mentions vanity metrics without appropriate caveats");
  }

  report.finish()
}
