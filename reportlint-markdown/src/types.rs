//! Types for the reportlint-markdown public API.
use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Section title used for tables that appear before any heading.
pub const TOP_LEVEL_SECTION: &str = "(top-level)";

/// Error returned when a severity, verdict or role hint name is not known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseEnumError {
  pub kind:  &'static str,
  pub value: String,
}

/// Severity of a finding.
///
/// Variants are declared most severe first, so the derived ordering is the
/// rank order: `Critical < High < Medium < Low`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
  Critical,
  High,
  Medium,
  Low,
}

impl Severity {
  /// All severities, most severe first.
  pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

  /// Rank of the severity, `0` being the most severe.
  #[must_use]
  pub const fn rank(self) -> u8 {
    match self {
      Self::Critical => 0,
      Self::High => 1,
      Self::Medium => 2,
      Self::Low => 3,
    }
  }

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Critical => "CRITICAL",
      Self::High => "HIGH",
      Self::Medium => "MEDIUM",
      Self::Low => "LOW",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Severity {
  type Err = ParseEnumError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_uppercase().as_str() {
      "CRITICAL" => Ok(Self::Critical),
      "HIGH" => Ok(Self::High),
      "MEDIUM" => Ok(Self::Medium),
      "LOW" => Ok(Self::Low),
      _ => {
        Err(ParseEnumError {
          kind:  "severity",
          value: s.to_string(),
        })
      },
    }
  }
}

/// Overall outcome attached to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
  Pass,
  Warn,
  Fail,
}

impl Verdict {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Pass => "PASS",
      Self::Warn => "WARN",
      Self::Fail => "FAIL",
    }
  }
}

impl fmt::Display for Verdict {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Verdict {
  type Err = ParseEnumError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_uppercase().as_str() {
      "PASS" => Ok(Self::Pass),
      "WARN" => Ok(Self::Warn),
      "FAIL" => Ok(Self::Fail),
      _ => {
        Err(ParseEnumError {
          kind:  "verdict",
          value: s.to_string(),
        })
      },
    }
  }
}

/// Coarse guess at which role wrote a document.
///
/// This is a soft signal. Validators only ever warn when it disagrees with
/// the role they are checking.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RoleHint {
  Terraform,
  Security,
  ImplementationPlan,
  Performance,
  Reliability,
  DesignSystem,
  CodeReview,
  Architecture,
  #[default]
  Unknown,
}

impl RoleHint {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Terraform => "terraform",
      Self::Security => "security",
      Self::ImplementationPlan => "implementation-plan",
      Self::Performance => "performance",
      Self::Reliability => "reliability",
      Self::DesignSystem => "design-system",
      Self::CodeReview => "code-review",
      Self::Architecture => "architecture",
      Self::Unknown => "unknown",
    }
  }
}

impl fmt::Display for RoleHint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for RoleHint {
  type Err = ParseEnumError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let hint = match s.trim() {
      "terraform" => Self::Terraform,
      "security" => Self::Security,
      "implementation-plan" => Self::ImplementationPlan,
      "performance" => Self::Performance,
      "reliability" => Self::Reliability,
      "design-system" => Self::DesignSystem,
      "code-review" => Self::CodeReview,
      "architecture" => Self::Architecture,
      "unknown" => Self::Unknown,
      _ => {
        return Err(ParseEnumError {
          kind:  "role hint",
          value: s.to_string(),
        });
      },
    };
    Ok(hint)
  }
}

/// A heading and everything under it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
  /// Heading level (1-6).
  pub level:       u8,
  /// Heading text without the leading hashes.
  pub title:       String,
  /// Text between this heading and the next heading of the same or a higher
  /// level, trimmed. Finding bodies that start below this heading are left
  /// out.
  pub content:     String,
  /// Headings nested under this one.
  pub subsections: Vec<Self>,
}

impl Section {
  /// Content of this section followed by the content of every descendant,
  /// joined with newlines.
  ///
  /// Descendant text repeats what `content` already holds, but finding
  /// bodies come back in through the finding subsections. Meant for
  /// substring checks.
  #[must_use]
  pub fn full_content(&self) -> String {
    let mut out = self.content.clone();
    for sub in &self.subsections {
      let nested = sub.full_content();
      if !nested.is_empty() {
        if !out.is_empty() {
          out.push('\n');
        }
        out.push_str(&nested);
      }
    }
    out
  }
}

/// A single flagged issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
  pub severity:       Severity,
  /// Heading text after the severity marker.
  pub title:          String,
  /// `- **Key:** value` pairs from the finding body, in order of first
  /// appearance. A repeated key keeps its position and takes the last value.
  pub fields:         IndexMap<String, String>,
  pub has_code_block: bool,
  /// First `CWE-NNN` reference in the title or body.
  pub cwe_reference:  Option<String>,
}

impl Finding {
  /// Look up a field by exact key.
  #[must_use]
  pub fn field(&self, key: &str) -> Option<&str> {
    self.fields.get(key).map(String::as_str)
  }

  /// Whether the field is present with a non-blank value.
  #[must_use]
  pub fn has_field(&self, key: &str) -> bool {
    self.field(key).is_some_and(|v| !v.trim().is_empty())
  }
}

/// A pipe table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
  /// Title of the closest heading above the table, or
  /// [`TOP_LEVEL_SECTION`].
  pub section_title: String,
  pub headers:       Vec<String>,
  /// Data rows. Row lengths are not forced to match the header.
  pub rows:          Vec<Vec<String>>,
}

impl Table {
  /// Index of the first header containing `needle` (case-insensitive).
  #[must_use]
  pub fn column_index(&self, needle: &str) -> Option<usize> {
    let needle = needle.to_lowercase();
    self
      .headers
      .iter()
      .position(|h| h.to_lowercase().contains(&needle))
  }

  /// Whether any header contains any of `needles` (case-insensitive).
  #[must_use]
  pub fn has_column(&self, needles: &[&str]) -> bool {
    needles.iter().any(|n| self.column_index(n).is_some())
  }

  /// Rows keyed by header name. Missing cells become empty strings.
  #[must_use]
  pub fn to_records(&self) -> Vec<IndexMap<String, String>> {
    self
      .rows
      .iter()
      .map(|row| {
        self
          .headers
          .iter()
          .enumerate()
          .map(|(i, h)| (h.clone(), row.get(i).cloned().unwrap_or_default()))
          .collect()
      })
      .collect()
  }
}

/// Everything recovered from one markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedDocument {
  /// The line the verdict was read from.
  pub verdict_line: Option<String>,
  pub verdict:      Option<Verdict>,
  pub role_hint:    RoleHint,
  /// Root sections in document order.
  pub sections:     Vec<Section>,
  /// Findings in document order, independent of the section tree.
  pub findings:     Vec<Finding>,
  pub tables:       Vec<Table>,
  /// The input, kept for substring checks.
  pub raw_text:     String,
}
