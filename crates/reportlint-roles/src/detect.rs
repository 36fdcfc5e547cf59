//! Classification of roles that write more than one kind of document.
//!
//! Both classifiers are ordered rule tables evaluated top to bottom against
//! the raw text. The first matching rule wins, and no match means
//! `Unknown`.
use std::{fmt, sync::LazyLock};

use log::debug;
use regex::Regex;
use reportlint_markdown::utils::compile;
use serde::Serialize;

/// Kinds of document the technical writer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocType {
  ApiDoc,
  MigrationGuide,
  Changelog,
  Readme,
  DocInventory,
  UserGuide,
  Unknown,
}

impl DocType {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::ApiDoc => "api-doc",
      Self::MigrationGuide => "migration-guide",
      Self::Changelog => "changelog",
      Self::Readme => "readme",
      Self::DocInventory => "doc-inventory",
      Self::UserGuide => "user-guide",
      Self::Unknown => "unknown",
    }
  }
}

impl fmt::Display for DocType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Kinds of artifact the UX researcher produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactType {
  /// Opportunity solution tree.
  Ost,
  Persona,
  JourneyMap,
  ResearchPlan,
  HeuristicEvaluation,
  Unknown,
}

impl ArtifactType {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Ost => "ost",
      Self::Persona => "persona",
      Self::JourneyMap => "journey-map",
      Self::ResearchPlan => "research-plan",
      Self::HeuristicEvaluation => "heuristic-evaluation",
      Self::Unknown => "unknown",
    }
  }
}

impl fmt::Display for ArtifactType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A classification and the predicate that selects it.
pub struct Rule<T> {
  pub kind:    T,
  pub matches: fn(&str) -> bool,
}

static API_HEADING_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?m)^##\s+(API|Endpoint|Function)"));
static API_BODY_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)quick start|parameters|response"));
static MIGRATION_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)migration guide|breaking changes|before.*after")
});
static VERSION_JUMP_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)v\d+.*to.*v\d+|upgrade"));
static RELEASE_HEADING_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?m)^##\s+\[?\d+\.\d+"));
static CHANGE_KIND_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"### (Added|Changed|Fixed|Removed)"));
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^#\s+\w"));
static README_BODY_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)quick start|features|contributing|license")
});
static INVENTORY_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)documentation inventory|coverage assessment")
});
static USER_GUIDE_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)getting started|what it does|common tasks|troubleshooting")
});

/// Technical writer rules in priority order.
pub const DOC_TYPE_RULES: &[Rule<DocType>] = &[
  Rule {
    kind:    DocType::ApiDoc,
    matches: |t| API_HEADING_RE.is_match(t) && API_BODY_RE.is_match(t),
  },
  Rule {
    kind:    DocType::MigrationGuide,
    matches: |t| MIGRATION_RE.is_match(t) && VERSION_JUMP_RE.is_match(t),
  },
  Rule {
    kind:    DocType::Changelog,
    matches: |t| RELEASE_HEADING_RE.is_match(t) && CHANGE_KIND_RE.is_match(t),
  },
  Rule {
    kind:    DocType::Readme,
    matches: |t| TITLE_RE.is_match(t) && README_BODY_RE.is_match(t),
  },
  Rule {
    kind:    DocType::DocInventory,
    matches: |t| INVENTORY_RE.is_match(t),
  },
  Rule {
    kind:    DocType::UserGuide,
    matches: |t| USER_GUIDE_RE.is_match(t),
  },
];

static OST_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)opportunity solution tree|target outcome")
});
static PERSONA_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?m)^##\s+Persona:"));
static JOURNEY_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?m)^##\s+User Journey:|(?i:journey map)"));
static RESEARCH_PLAN_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?m)^##\s+Research Plan:|(?i:research plan)"));
static HEURISTIC_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)heuristic evaluation|nielsen.*heuristic")
});

/// UX researcher rules in priority order.
pub const ARTIFACT_TYPE_RULES: &[Rule<ArtifactType>] = &[
  Rule {
    kind:    ArtifactType::Ost,
    matches: |t| OST_RE.is_match(t),
  },
  Rule {
    kind:    ArtifactType::Persona,
    matches: |t| PERSONA_RE.is_match(t),
  },
  Rule {
    kind:    ArtifactType::JourneyMap,
    matches: |t| JOURNEY_RE.is_match(t),
  },
  Rule {
    kind:    ArtifactType::ResearchPlan,
    matches: |t| RESEARCH_PLAN_RE.is_match(t),
  },
  Rule {
    kind:    ArtifactType::HeuristicEvaluation,
    matches: |t| HEURISTIC_RE.is_match(t),
  },
];

fn classify<T: Copy + fmt::Debug>(rules: &[Rule<T>], text: &str, default: T) -> T {
  let kind = rules
    .iter()
    .find(|rule| (rule.matches)(text))
    .map_or(default, |rule| rule.kind);
  debug!("Classified document as {kind:?}");
  kind
}

/// Classify a technical writer document.
#[must_use]
pub fn detect_doc_type(text: &str) -> DocType {
  classify(DOC_TYPE_RULES, text, DocType::Unknown)
}

/// Classify a UX researcher artifact.
#[must_use]
pub fn detect_artifact_type(text: &str) -> ArtifactType {
  classify(ARTIFACT_TYPE_RULES, text, ArtifactType::Unknown)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn doc_types() {
    let cases = [
      (
        "# Widget API\n\n## API Reference\n\n### Parameters\n",
        DocType::ApiDoc,
      ),
      (
        "# Migration Guide\n\nUpgrade from v1 to v2.\n",
        DocType::MigrationGuide,
      ),
      (
        "## [1.2.0] - 2024-01-01\n\n### Added\n- thing\n",
        DocType::Changelog,
      ),
      ("# Widget\n\n## Features\n", DocType::Readme),
      ("## Documentation Inventory\n", DocType::DocInventory),
      ("## Getting Started\n", DocType::UserGuide),
      ("just some words\n", DocType::Unknown),
      ("", DocType::Unknown),
    ];
    for (text, expected) in cases {
      assert_eq!(detect_doc_type(text), expected, "{text:?}");
    }
  }

  #[test]
  fn api_rule_beats_readme_rule() {
    let text = "# Widget\n\n## API\n\n## Quick Start\n";
    assert_eq!(detect_doc_type(text), DocType::ApiDoc);
  }

  #[test]
  fn artifact_types() {
    let cases = [
      ("## Target Outcome\n", ArtifactType::Ost),
      ("## Persona: Dana the Developer\n", ArtifactType::Persona),
      ("## User Journey: Checkout\n", ArtifactType::JourneyMap),
      ("A journey map for onboarding\n", ArtifactType::JourneyMap),
      ("## Research Plan: Pricing\n", ArtifactType::ResearchPlan),
      ("# Heuristic Evaluation\n", ArtifactType::HeuristicEvaluation),
      ("Nielsen's ten heuristics\n", ArtifactType::HeuristicEvaluation),
      ("nothing here\n", ArtifactType::Unknown),
    ];
    for (text, expected) in cases {
      assert_eq!(detect_artifact_type(text), expected, "{text:?}");
    }
  }

  #[test]
  fn ost_rule_wins_over_persona() {
    let text = "## Persona: Dana\n\n## Target Outcome\n";
    assert_eq!(detect_artifact_type(text), ArtifactType::Ost);
  }
}
