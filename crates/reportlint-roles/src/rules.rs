//! Declarative rule sets shared by the role validators.
//!
//! A [`RuleSet`] covers the checks most roles have in common: the verdict,
//! the coarse role hint, section groups, finding fields and the severity
//! ordering checks. Anything a role needs beyond that lives in the role's own
//! module and runs after [`RuleSet::check`].
use reportlint_markdown::{
  Finding,
  ParsedDocument,
  RoleHint,
  Section,
  Table,
  are_findings_sorted,
  find_any_section,
  is_verdict_consistent,
};

use crate::result::{Level, Report};

/// How a missing section group is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
  /// Missing is an error.
  Required,
  /// Missing is a warning.
  Expected,
  /// Missing is a warning, worded as optional.
  Optional,
}

/// A section the document should have, under any of several titles.
#[derive(Debug, Clone, Copy)]
pub struct SectionGroup {
  pub presence: Presence,
  pub aliases:  &'static [&'static str],
}

impl SectionGroup {
  #[must_use]
  pub const fn required(aliases: &'static [&'static str]) -> Self {
    Self {
      presence: Presence::Required,
      aliases,
    }
  }

  #[must_use]
  pub const fn expected(aliases: &'static [&'static str]) -> Self {
    Self {
      presence: Presence::Expected,
      aliases,
    }
  }

  #[must_use]
  pub const fn optional(aliases: &'static [&'static str]) -> Self {
    Self {
      presence: Presence::Optional,
      aliases,
    }
  }

  /// The first section matching one of the aliases.
  #[must_use]
  pub fn find<'a>(&self, sections: &'a [Section]) -> Option<&'a Section> {
    find_any_section(sections, self.aliases)
  }

  fn check(&self, sections: &[Section], report: &mut Report) {
    if self.find(sections).is_some() {
      return;
    }
    let list = self.aliases.join(", ");
    match self.presence {
      Presence::Required => {
        report.error(format!("Missing required section: one of [{list}]"));
      },
      Presence::Expected => {
        report.warning(format!("Expected section not found: one of [{list}]"));
      },
      Presence::Optional => {
        report.warning(format!("Optional section not found: one of [{list}]"));
      },
    }
  }
}

/// Whether the role must state a PASS/WARN/FAIL verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictPolicy {
  /// A missing verdict is an error. The role hint is only compared once a
  /// verdict was found.
  Required,
  /// The verdict is not checked here. The role hint is always compared.
  NotRequired,
}

/// Checks shared by most roles.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
  pub verdict:        VerdictPolicy,
  /// Expected coarse classification of the document, if the role has one.
  pub hint:           Option<RoleHint>,
  pub sections:       &'static [SectionGroup],
  /// Fields every finding using the bold-key convention must carry.
  pub finding_fields: &'static [&'static str],
  pub field_level:    Level,
}

impl RuleSet {
  /// A rule set with no requirements at all.
  pub const EMPTY: Self = Self {
    verdict:        VerdictPolicy::NotRequired,
    hint:           None,
    sections:       &[],
    finding_fields: &[],
    field_level:    Level::Warning,
  };

  /// Run every shared check against `doc`.
  pub fn check(&self, doc: &ParsedDocument, report: &mut Report) {
    self.check_verdict(doc, report);
    for group in self.sections {
      group.check(&doc.sections, report);
    }
    for finding in &doc.findings {
      self.check_fields(finding, report);
    }
    check_ordering(doc, report);
  }

  fn check_verdict(&self, doc: &ParsedDocument, report: &mut Report) {
    let hint_checked = match self.verdict {
      VerdictPolicy::Required => {
        if doc.verdict.is_none() {
          report.error(
            "Missing verdict: could not detect PASS, WARN, or FAIL in output",
          );
          false
        } else {
          true
        }
      },
      VerdictPolicy::NotRequired => true,
    };

    if let Some(expected) = self.hint
      && hint_checked
      && doc.role_hint != expected
    {
      report.warning(format!(
        "Agent type detected as \"{}\" instead of \"{expected}\"",
        doc.role_hint
      ));
    }
  }

  /// Findings written as prose, with no fields at all, are left alone.
  fn check_fields(&self, finding: &Finding, report: &mut Report) {
    if finding.fields.is_empty() {
      return;
    }
    let missing = match self.field_level {
      Level::Error => "missing required field",
      Level::Warning => "missing field",
    };
    for field in self.finding_fields {
      if !finding.has_field(field) {
        report.push(
          self.field_level,
          format!("Finding \"{}\" {missing}: \"{field}\"", finding.title),
        );
      }
    }
  }
}

/// Severity order and verdict consistency. Both are warnings, and neither
/// fires without findings.
pub fn check_ordering(doc: &ParsedDocument, report: &mut Report) {
  if doc.findings.is_empty() {
    return;
  }

  if !are_findings_sorted(&doc.findings) {
    report.warning(
      "Findings are not sorted by severity (expected: CRITICAL > HIGH > MEDIUM \
       > LOW)",
    );
  }

  if let Some(verdict) = doc.verdict
    && !is_verdict_consistent(verdict, &doc.findings)
  {
    let severities: Vec<&str> =
      doc.findings.iter().map(|f| f.severity.as_str()).collect();
    report.warning(format!(
      "Verdict \"{verdict}\" may be inconsistent with findings [{}]. \
       CRITICAL/HIGH → FAIL, MEDIUM-only → WARN, LOW/none → PASS",
      severities.join(", ")
    ));
  }
}

/// First table whose section title contains any of `needles`
/// (case-insensitive).
#[must_use]
pub fn table_under<'a>(tables: &'a [Table], needles: &[&str]) -> Option<&'a Table> {
  tables.iter().find(|table| {
    let title = table.section_title.to_lowercase();
    needles.iter().any(|n| title.contains(n))
  })
}

/// Whether any section title matches one of the aliases.
#[must_use]
pub fn has_any_section(doc: &ParsedDocument, aliases: &[&str]) -> bool {
  find_any_section(&doc.sections, aliases).is_some()
}
