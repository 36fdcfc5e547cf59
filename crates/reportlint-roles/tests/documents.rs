#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
//! Roles that write structured documents rather than reviews.
use reportlint_roles::{
  ArtifactType,
  DocType,
  Role,
  detect_artifact_type,
  detect_doc_type,
};

#[test]
fn test_adr_missing_sections_mention_decision() {
  let result = Role::ArchitectAdr
    .validate("# ADR-001: Use Redis\n\n## Status\nAccepted\n\n## Context\nSome context\n");
  assert!(!result.valid);
  assert!(result.has_error("Decision"));
  assert!(result.has_error("Consequences"));
  assert!(result.has_error("Alternatives Considered"));
  assert!(!result.has_error("Missing ADR heading"));
}

#[test]
fn test_adr_alternatives_table_needs_two_rows() {
  let text = "# ADR-002: Queue\n\n## Status\nProposed\n\n## Context\nx\n\n## \
              Decision\nUse SQS\n\n## Consequences\nVendor lock-in\n\n## \
              Alternatives Considered\n\n| Option | Why not |\n|---|---|\n| Kafka | \
              Ops cost |\n";
  let result = Role::ArchitectAdr.validate(text);
  assert!(result.valid, "{:?}", result.errors);
  assert!(result.has_warning("at least 2 alternatives"));

  let two = text.replace("| Kafka | Ops cost |\n", "| Kafka | Ops cost |\n| RabbitMQ | Another cluster |\n");
  assert!(Role::ArchitectAdr.validate(&two).warnings.is_empty());
}

#[test]
fn test_adr_without_heading() {
  let result = Role::ArchitectAdr.validate("## Status\nAccepted\n");
  assert!(result.has_error("Missing ADR heading"));
}

const PLAN: &str = r"# Implementation Plan: Widgets

## Overview

Ship the widget service.

## Decisions

| # | Decision | Context | Rationale |
|---|----------|---------|-----------|
| D1 | Use Rust | Latency budget | Predictable performance |

## Open Questions

| # | Question | Impact | Status |
|---|----------|--------|--------|
| Q1 | Which database? | High | Open |

## Phase 1: Foundation

### Milestone 1.1: Skeleton

| # | Task | Complexity | Dependencies | Status |
|---|------|------------|--------------|--------|
| 1 | Scaffold the service | S | None | pending |
| 2 | Wire up storage | M | 1 | pending |

**Parallelizable:** Tasks 1 and 2 touch different crates.
**Milestone Value:** A deployable skeleton.
";

#[test]
fn test_implementation_plan_is_clean() {
  let result = Role::ImplementationPlan.validate(PLAN);
  assert!(result.valid, "{:?}", result.errors);
  assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn test_implementation_plan_missing_decisions() {
  let start = PLAN.find("## Decisions").expect("decisions");
  let end = PLAN.find("## Open Questions").expect("questions");
  let text = format!("{}{}", &PLAN[..start], &PLAN[end..]);

  let result = Role::ImplementationPlan.validate(&text);
  assert!(!result.valid);
  assert!(result.has_error("Decisions"));
  assert!(result.has_warning("No table found in Decisions section"));
}

#[test]
fn test_implementation_plan_table_columns_and_complexity() {
  let text = PLAN
    .replace("| Rationale |", "| Why |")
    .replace("| Wire up storage | M |", "| Wire up storage | XL |");
  let result = Role::ImplementationPlan.validate(&text);
  assert!(result.has_error(r#"Decisions table missing column: "Rationale""#));
  assert!(result.has_warning(
    r#"Task table in "Milestone 1.1: Skeleton": invalid complexity "XL""#
  ));
}

#[test]
fn test_implementation_plan_structure_errors() {
  let result = Role::ImplementationPlan.validate("# Plan\n\nSome prose.\n");
  for needle in [
    "Missing top heading",
    r#"Missing required section: "Overview""#,
    "Missing Phase section",
    "Missing Milestone section",
  ] {
    assert!(result.has_error(needle), "{needle}: {:?}", result.errors);
  }
  assert!(result.has_warning("**Parallelizable:**"));
  assert!(result.has_warning("**Milestone Value:**"));
}

fn retro(improvements: usize) -> String {
  let mut text = String::from(
    "# Sprint 12 Retrospective\n\n## Start\nPairing on reviews\n\n## Stop\nLate \
     merges\n\n## Improvement Items\n\n",
  );
  for n in 1..=improvements {
    text.push_str(&format!("### Improvement {n}: Item {n}\nOwner: team\n\n"));
  }
  text.push_str("## Celebration\nWe shipped the beta.\n");
  text
}

#[test]
fn test_retro_too_many_improvement_items() {
  let result = Role::RetrospectiveFacilitator.validate(&retro(4));
  assert!(result.valid);
  assert!(result.has_warning("Too many improvement items: 4"));

  let result = Role::RetrospectiveFacilitator.validate(&retro(3));
  assert!(!result.has_warning("Too many improvement items"));
  assert!(!result.has_warning("No recognizable retrospective format"));
  assert!(!result.has_warning("Celebration"));
}

#[test]
fn test_retro_previous_items_are_not_counted() {
  let text = "# Retro\n\n## Previous Improvement Items\n\n### One\n### Two\n### \
              Three\n### Four\n\n## Improvement Items\n\n### Improvement 1: \
              Smaller PRs\n";
  let result = Role::RetrospectiveFacilitator.validate(text);
  assert!(!result.has_warning("Too many improvement items"));
}

#[test]
fn test_retro_blame_language() {
  let text = format!("{}\nLast week he failed to configure the deployment.\n", retro(1));
  let result = Role::RetrospectiveFacilitator.validate(&text);
  assert!(result.valid);
  assert!(result.has_warning("blame language"));

  assert!(!Role::RetrospectiveFacilitator.validate(&retro(1)).has_warning("blame"));
}

#[test]
fn test_retro_context_and_follow_up_table() {
  let text = "# Weekly sync\n\n## Follow-Up\n\n| Item | Owner |\n|---|---|\n| CI \
              flakes | Sam |\n";
  let result = Role::RetrospectiveFacilitator.validate(text);
  assert!(result.has_warning("does not appear to be a Retrospective"));
  assert!(result.has_warning("Previous Improvement Items table missing Status column"));
  assert!(result.has_warning("Missing Celebration section"));
}

const METRICS: &str = r"# Engineering Metrics Report

## Reporting Period
Q1 2025

## DORA

| Metric | Value | Benchmark |
|--------|-------|-----------|
| Deployment frequency | 4.2/day | Elite |

## Key Insights
Lead time fell 20% after the pipeline change.

## Recommendations
Keep investing in the pipeline.

## Context & Caveats
Lines of code is a vanity metric and should not be used to judge teams.
";

#[test]
fn test_metrics_report_is_clean() {
  let result = Role::MetricsAnalyst.validate(METRICS);
  assert!(result.valid);
  assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn test_metrics_vanity_and_missing_numbers() {
  let result =
    Role::MetricsAnalyst.validate("# Metrics Report\n\nWe wrote many lines of code.\n");
  assert!(result.has_warning("vanity metrics without appropriate caveats"));
  assert!(result.has_warning("quantitative data"));

  let result = Role::MetricsAnalyst.validate("# Weekly notes\n");
  assert!(result.has_warning("does not appear to be a Metrics Report or OKR Report"));
}

#[test]
fn test_metrics_dora_table_columns() {
  let text = METRICS.replace("| Metric | Value | Benchmark |", "| Name | Value | Trend |");
  let result = Role::MetricsAnalyst.validate(&text);
  assert!(result.has_warning("DORA metrics table missing Metric column"));
  assert!(result.has_warning("DORA metrics table missing Benchmark/Target column"));
}

#[test]
fn test_quality_coverage_table_and_gaps() {
  let text = "# Test Coverage Analysis\n\n## Coverage Report\n\n| Area | Tests \
              |\n|---|---|\n| auth | 3 |\n\n## Gap Analysis\nAuth module lacks \
              tests.\n";
  let result = Role::QualityEngineer.validate(text);
  assert!(result.valid);
  assert!(!result.has_warning("does not appear"));
  assert!(result.has_warning("Coverage table missing Module/Component column"));
  assert!(result.has_warning("Coverage table missing coverage percentage column"));
  assert!(result.has_warning("Gap Analysis entries should include priority levels"));

  let prioritised = text.replace("Auth module lacks tests.", "### P1: Auth module");
  let result = Role::QualityEngineer.validate(&prioritised);
  assert!(!result.has_warning("priority levels"));
}

#[test]
fn test_technical_writer_unknown_type_is_permissive() {
  let result = Role::TechnicalWriter.validate("just some words\n");
  assert!(result.valid);
  assert!(result.errors.is_empty());
  assert_eq!(result.warnings.len(), 1);
  assert!(result.has_warning("Could not detect documentation type"));
}

#[test]
fn test_technical_writer_api_doc() {
  let text = "# Widget API\n\n## API Reference\n\n### Parameters\n\n| Name | Type \
              |\n|---|---|\n| id | string |\n";
  assert_eq!(detect_doc_type(text), DocType::ApiDoc);
  let result = Role::TechnicalWriter.validate(text);
  assert!(result.has_error("must include a \"Quick Start\" or \"Examples\" section"));
  assert!(result.has_error("must include code examples"));
  assert!(result.has_warning("Missing \"Response\" or \"Return Value\" section"));
  assert!(!result.has_warning("Parameters"));
}

#[test]
fn test_technical_writer_readme_and_changelog() {
  let readme = "# widget\n\n## Quick Start\n\n```bash\ncargo install widget\n```\n\n## \
                License\nMIT\n";
  assert_eq!(detect_doc_type(readme), DocType::Readme);
  let result = Role::TechnicalWriter.validate(readme);
  assert!(result.valid);
  assert!(result.warnings.is_empty(), "{:?}", result.warnings);

  let changelog = "## [2.0.0] - 2025-03-01\n\n### Added\n- Streaming API\n";
  assert_eq!(detect_doc_type(changelog), DocType::Changelog);
  assert!(Role::TechnicalWriter.validate(changelog).valid);
}

#[test]
fn test_technical_writer_migration_guide() {
  let text = "# Migration Guide\n\nUpgrade from v1 to v2.\n";
  let result = Role::TechnicalWriter.validate(text);
  assert!(result.has_error("Breaking Changes"));
  assert!(result.has_warning("before/after code examples"));
  assert!(result.has_warning("migration steps"));
}

#[test]
fn test_ux_persona_and_unknown() {
  let text = "## Persona: Dana the Developer\n\n### Goals\nShip faster\n";
  assert_eq!(detect_artifact_type(text), ArtifactType::Persona);
  let result = Role::UxResearcher.validate(text);
  assert!(!result.valid);
  assert!(result.has_error("Missing required Persona section: Pain Points"));
  assert!(result.has_error("Missing required Persona section: Evidence Basis"));
  assert!(!result.has_error("Goals"));
  assert!(result.has_warning("Confidence Level"));

  let unknown = Role::UxResearcher.validate("Some notes\n");
  assert!(unknown.valid);
  assert_eq!(unknown.warnings.len(), 1);
}

#[test]
fn test_ux_opportunity_tree_metric() {
  let text = "# Opportunity Solution Tree\n\n## Target Outcome\nHappier users\n\n## \
              Opportunities\n- Faster onboarding\n\n## Assumptions to Test\n- Users \
              read docs\n";
  let result = Role::UxResearcher.validate(text);
  assert!(result.valid, "{:?}", result.errors);
  assert!(result.has_warning("Target Outcome should include a measurable metric"));

  let measured = text.replace("Happier users", "Raise the activation metric to 40%");
  assert!(Role::UxResearcher.validate(&measured).warnings.is_empty());
}

#[test]
fn test_ux_heuristic_evaluation() {
  let text = "# Heuristic Evaluation\n\n| Heuristic | Rating |\n|---|---|\n| \
              Visibility | 3 |\n";
  let result = Role::UxResearcher.validate(text);
  assert!(!result.has_warning("scoring table"));
  assert!(result.has_warning("Missing Overall Score"));
  assert!(result.has_warning("Nielsen"));
}

const PM_DEFINITION: &str = r"# Product Manager

You run as a sub-agent, so plain text output goes to the parent agent.

## Requirements Gathering (Interactive Q&A)

Ask every question with AskUserQuestion.

### Follow-ups

Keep asking until the scope is clear.

## Critical Rules

1. Always use AskUserQuestion for questions.

## Behavioral Rules

- Batch related questions into one AskUserQuestion call.
";

#[test]
fn test_product_manager_definition_is_clean() {
  let result = Role::ProductManager.validate(PM_DEFINITION);
  assert!(result.valid, "{:?}", result.errors);
  assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn test_product_manager_sections_must_mention_the_tool() {
  let text = PM_DEFINITION.replace(
    "1. Always use AskUserQuestion for questions.",
    "1. Be concise.",
  );
  let result = Role::ProductManager.validate(&text);
  assert!(result.has_error("Critical Rules section does not mention AskUserQuestion"));

  let result = Role::ProductManager.validate("# Product Manager\n\nWrite specs.\n");
  assert!(result.has_error("does not mention AskUserQuestion"));
  assert!(result.has_error("Missing \"Requirements Gathering\" section"));
  assert!(result.has_error("Missing \"Behavioral Rules\" section"));
  assert!(result.has_warning("plain text output"));
  assert!(result.has_warning("sub-agent context"));
}

#[test]
fn test_product_manager_empty_section_counts_as_missing() {
  let text = "# Product Manager\n\nAlways use AskUserQuestion.\n\n## Critical \
              Rules\n\n## Behavioral Rules\nUse AskUserQuestion.\n";
  let result = Role::ProductManager.validate(text);
  assert!(result.has_error("Missing \"Critical Rules\" section"));
  assert!(!result.has_error("Critical Rules section does not mention"));
  assert!(!result.has_error("Missing \"Behavioral Rules\" section"));
}

#[test]
fn test_plan_command_mentions_the_tool() {
  assert!(Role::WriteImplementationPlan.validate("Step 4: use AskUserQuestion").valid);
  assert!(!Role::WriteImplementationPlan.validate("Step 4: interview").valid);
}
