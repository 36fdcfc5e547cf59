//! Role hint inference from document content.
use std::sync::LazyLock;

use regex::Regex;

use crate::{types::RoleHint, utils::compile};

static TERRAFORM_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)terraform"));
static TERRAFORM_CONTEXT_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)resource|plan|infrastructure"));
static SECURITY_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)security review|vulnerabilit|CWE-"));
static IMPLEMENTATION_PLAN_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?m)^#\s+Implementation Plan:"));
static PERFORMANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(
    r"(?i)performance (?:review|analysis|audit|report|budget|findings)|core web vitals",
  )
});
static RELIABILITY_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)reliability review|\bSLOs?\b|error budget|runbook")
});
static DESIGN_SYSTEM_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)design system|design token|token violation")
});
static CODE_REVIEW_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)code review"));
static ARCHITECTURE_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)architect|architecture decision record|ADR-\d+")
});

/// A role hint and the predicate that selects it.
pub struct HintRule {
  pub hint:    RoleHint,
  pub matches: fn(&str) -> bool,
}

/// Hint rules in priority order. The first rule whose predicate holds wins.
pub const HINT_RULES: &[HintRule] = &[
  HintRule {
    hint:    RoleHint::Terraform,
    matches: is_terraform,
  },
  HintRule {
    hint:    RoleHint::Security,
    matches: is_security,
  },
  HintRule {
    hint:    RoleHint::ImplementationPlan,
    matches: is_implementation_plan,
  },
  HintRule {
    hint:    RoleHint::Performance,
    matches: is_performance,
  },
  HintRule {
    hint:    RoleHint::Reliability,
    matches: is_reliability,
  },
  HintRule {
    hint:    RoleHint::DesignSystem,
    matches: is_design_system,
  },
  HintRule {
    hint:    RoleHint::CodeReview,
    matches: is_code_review,
  },
  HintRule {
    hint:    RoleHint::Architecture,
    matches: is_architecture,
  },
];

fn is_terraform(text: &str) -> bool {
  TERRAFORM_RE.is_match(text) && TERRAFORM_CONTEXT_RE.is_match(text)
}

fn is_security(text: &str) -> bool {
  SECURITY_RE.is_match(text)
}

fn is_implementation_plan(text: &str) -> bool {
  IMPLEMENTATION_PLAN_RE.is_match(text)
}

fn is_performance(text: &str) -> bool {
  PERFORMANCE_RE.is_match(text)
}

fn is_reliability(text: &str) -> bool {
  RELIABILITY_RE.is_match(text)
}

fn is_design_system(text: &str) -> bool {
  DESIGN_SYSTEM_RE.is_match(text)
}

fn is_code_review(text: &str) -> bool {
  CODE_REVIEW_RE.is_match(text)
}

fn is_architecture(text: &str) -> bool {
  ARCHITECTURE_RE.is_match(text)
}

/// Guess which role produced `text`.
#[must_use]
pub fn infer_role_hint(text: &str) -> RoleHint {
  HINT_RULES
    .iter()
    .find(|rule| (rule.matches)(text))
    .map_or(RoleHint::Unknown, |rule| rule.hint)
}
