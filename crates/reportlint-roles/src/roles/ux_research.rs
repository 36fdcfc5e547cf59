//! UX research artifacts, validated per detected [`ArtifactType`].
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{ParsedDocument, find_section, parse, utils::compile};

use crate::{
  detect::{ArtifactType, detect_artifact_type},
  result::{Report, ValidationResult},
  rules::has_any_section,
};

static METRIC_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)metric|measure|kpi"));
static CONFIDENCE_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)confidence level"));
static OVERALL_SCORE_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)overall score"));
static NIELSEN_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)nielsen"));

fn has_table_column(doc: &ParsedDocument, needles: &[&str]) -> bool {
  doc.tables.iter().any(|t| t.has_column(needles))
}

fn opportunity_tree(text: &str, doc: &ParsedDocument, report: &mut Report) {
  let outcome = find_section(&doc.sections, "Target Outcome");
  report.error_unless(
    outcome.is_some(),
    "Missing required section: Target Outcome",
  );
  report.error_unless(
    has_any_section(doc, &["Opportunities", "Opportunity"]),
    "Missing required section: Opportunities",
  );
  report.warn_unless(
    has_any_section(doc, &["Assumptions"]),
    "Missing \"Assumptions to Test\" section",
  );
  if let Some(outcome) = outcome {
    report.warn_unless(
      METRIC_RE.is_match(&outcome.content) || text.contains("**Metric:**"),
      "Target Outcome should include a measurable metric",
    );
  }
}

fn persona(text: &str, doc: &ParsedDocument, report: &mut Report) {
  for name in ["Goals", "Pain Points", "Evidence Basis"] {
    report.error_unless(
      has_any_section(doc, &[name]),
      format!("Missing required Persona section: {name}"),
    );
  }
  report.warn_unless(
    CONFIDENCE_RE.is_match(text),
    "Missing Confidence Level indicator (HIGH/MEDIUM/LOW)",
  );
}

fn journey_map(doc: &ParsedDocument, report: &mut Report) {
  report.warn_unless(
    has_table_column(doc, &["stage", "actions"]),
    "Journey Map should include a stage-by-stage table",
  );
  report.warn_unless(
    has_any_section(doc, &["Key Moments"]),
    "Missing \"Key Moments\" section",
  );
}

fn research_plan(doc: &ParsedDocument, report: &mut Report) {
  for name in ["Objective", "Method", "Participants", "Deliverables"] {
    report.error_unless(
      has_any_section(doc, &[name]),
      format!("Missing required Research Plan section: {name}"),
    );
  }
}

fn heuristic_evaluation(text: &str, doc: &ParsedDocument, report: &mut Report) {
  report.warn_unless(
    has_table_column(doc, &["heuristic", "rating"]),
    "Heuristic Evaluation should include a scoring table",
  );
  report.warn_unless(OVERALL_SCORE_RE.is_match(text), "Missing Overall Score");
  report.warn_unless(
    NIELSEN_RE.is_match(text),
    "Should reference Nielsen's 10 Usability Heuristics",
  );
}

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();

  match detect_artifact_type(text) {
    ArtifactType::Ost => opportunity_tree(text, &doc, &mut report),
    ArtifactType::Persona => persona(text, &doc, &mut report),
    ArtifactType::JourneyMap => journey_map(&doc, &mut report),
    ArtifactType::ResearchPlan => research_plan(&doc, &mut report),
    ArtifactType::HeuristicEvaluation => {
      heuristic_evaluation(text, &doc, &mut report);
    },
    ArtifactType::Unknown => {
      report.warning(
        "Could not detect UX research artifact type (unable to validate \
         structure)",
      );
    },
  }

  report.finish()
}
