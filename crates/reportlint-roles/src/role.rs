use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
  detect::{detect_artifact_type, detect_doc_type},
  result::ValidationResult,
  roles,
};

/// A role identifier that names no known role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown role '{0}'. Run `reportlint roles` to list the known roles")]
pub struct UnknownRole(pub String);

/// Every role with a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
  TerraformPlanReviewer,
  SecurityReviewer,
  CodeReviewer,
  DesignSystemAgent,
  Architect,
  ArchitectAdr,
  ImplementationPlan,
  MetricsAnalyst,
  PerformanceEngineer,
  QualityEngineer,
  RetrospectiveFacilitator,
  ReviewerFeedback,
  SreAgent,
  TechnicalWriter,
  UxResearcher,
  ProductManager,
  WriteImplementationPlan,
}

impl Role {
  pub const ALL: [Self; 17] = [
    Self::TerraformPlanReviewer,
    Self::SecurityReviewer,
    Self::CodeReviewer,
    Self::DesignSystemAgent,
    Self::Architect,
    Self::ArchitectAdr,
    Self::ImplementationPlan,
    Self::MetricsAnalyst,
    Self::PerformanceEngineer,
    Self::QualityEngineer,
    Self::RetrospectiveFacilitator,
    Self::ReviewerFeedback,
    Self::SreAgent,
    Self::TechnicalWriter,
    Self::UxResearcher,
    Self::ProductManager,
    Self::WriteImplementationPlan,
  ];

  /// The identifier used on the command line and in snapshot names.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::TerraformPlanReviewer => "terraform-plan-reviewer",
      Self::SecurityReviewer => "security-reviewer",
      Self::CodeReviewer => "code-reviewer",
      Self::DesignSystemAgent => "design-system-agent",
      Self::Architect => "architect",
      Self::ArchitectAdr => "architect-adr",
      Self::ImplementationPlan => "implementation-plan",
      Self::MetricsAnalyst => "metrics-analyst",
      Self::PerformanceEngineer => "performance-engineer",
      Self::QualityEngineer => "quality-engineer",
      Self::RetrospectiveFacilitator => "retrospective-facilitator",
      Self::ReviewerFeedback => "reviewer-feedback",
      Self::SreAgent => "sre-agent",
      Self::TechnicalWriter => "technical-writer",
      Self::UxResearcher => "ux-researcher",
      Self::ProductManager => "product-manager",
      Self::WriteImplementationPlan => "write-implementation-plan",
    }
  }

  /// Validate `text` as output of this role.
  #[must_use]
  pub fn validate(self, text: &str) -> ValidationResult {
    log::debug!("Validating {} bytes as {self}", text.len());
    match self {
      Self::TerraformPlanReviewer => roles::terraform::validate(text),
      Self::SecurityReviewer => roles::security::validate(text),
      Self::CodeReviewer => roles::code_review::validate(text),
      Self::DesignSystemAgent => roles::design_system::validate(text),
      Self::Architect => roles::architect::validate(text),
      Self::ArchitectAdr => roles::adr::validate(text),
      Self::ImplementationPlan => roles::implementation_plan::validate(text),
      Self::MetricsAnalyst => roles::metrics::validate(text),
      Self::PerformanceEngineer => roles::performance::validate(text),
      Self::QualityEngineer => roles::quality::validate(text),
      Self::RetrospectiveFacilitator => roles::retrospective::validate(text),
      Self::ReviewerFeedback => roles::reviewer_feedback::validate(text),
      Self::SreAgent => roles::sre::validate(text),
      Self::TechnicalWriter => roles::technical_writer::validate(text),
      Self::UxResearcher => roles::ux_research::validate(text),
      Self::ProductManager => roles::product_manager::validate(text),
      Self::WriteImplementationPlan => {
        roles::product_manager::validate_plan_command(text)
      },
    }
  }

  /// The document type `text` would be validated as, for roles that write
  /// more than one kind of document.
  #[must_use]
  pub fn detect(self, text: &str) -> Option<&'static str> {
    match self {
      Self::TechnicalWriter => Some(detect_doc_type(text).as_str()),
      Self::UxResearcher => Some(detect_artifact_type(text).as_str()),
      _ => None,
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Role {
  type Err = UnknownRole;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    Self::ALL
      .into_iter()
      .find(|role| role.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| UnknownRole(s.to_string()))
  }
}

impl TryFrom<String> for Role {
  type Error = UnknownRole;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<Role> for String {
  fn from(role: Role) -> Self {
    role.as_str().to_string()
  }
}
