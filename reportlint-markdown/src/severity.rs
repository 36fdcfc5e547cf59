//! Severity ordering and verdict consistency.
//!
//! A verdict is consistent with its findings when it matches the verdict
//! implied by the most severe finding:
//!
//! | Most severe finding | Verdict |
//! |---------------------|---------|
//! | CRITICAL or HIGH    | FAIL    |
//! | MEDIUM              | WARN    |
//! | LOW or none         | PASS    |
//!
//! Report generators sometimes deviate on purpose, so callers treat a
//! mismatch as a warning.
use crate::types::{Finding, Severity, Verdict};

/// Whether findings are listed most severe first.
///
/// Findings of equal severity may appear in any order.
#[must_use]
pub fn are_findings_sorted(findings: &[Finding]) -> bool {
  findings
    .windows(2)
    .all(|pair| pair[0].severity.rank() <= pair[1].severity.rank())
}

/// The most severe severity present, if any.
#[must_use]
pub fn max_severity(findings: &[Finding]) -> Option<Severity> {
  findings.iter().map(|f| f.severity).min()
}

/// The verdict implied by the most severe finding.
#[must_use]
pub const fn expected_verdict(max: Option<Severity>) -> Verdict {
  match max {
    Some(Severity::Critical | Severity::High) => Verdict::Fail,
    Some(Severity::Medium) => Verdict::Warn,
    Some(Severity::Low) | None => Verdict::Pass,
  }
}

/// Whether `verdict` agrees with the severities in `findings`.
#[must_use]
pub fn is_verdict_consistent(verdict: Verdict, findings: &[Finding]) -> bool {
  expected_verdict(max_severity(findings)) == verdict
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap;

  use super::*;

  fn finding(severity: Severity) -> Finding {
    Finding {
      severity,
      title: format!("{severity} thing"),
      fields: IndexMap::new(),
      has_code_block: false,
      cwe_reference: None,
    }
  }

  fn all(severities: &[Severity]) -> Vec<Finding> {
    severities.iter().copied().map(finding).collect()
  }

  #[test]
  fn sorted_allows_ties() {
    use Severity::*;
    assert!(are_findings_sorted(&[]));
    assert!(are_findings_sorted(&all(&[Low])));
    assert!(are_findings_sorted(&all(&[Critical, High, High, Low])));
    assert!(!are_findings_sorted(&all(&[High, Critical])));
    assert!(!are_findings_sorted(&all(&[Medium, Low, Medium])));
  }

  #[test]
  fn max_severity_picks_most_severe() {
    use Severity::*;
    assert_eq!(max_severity(&[]), None);
    assert_eq!(max_severity(&all(&[Low, High, Medium])), Some(High));
  }

  #[test]
  fn consistency_table() {
    use Severity::*;
    assert!(is_verdict_consistent(Verdict::Pass, &[]));
    assert!(is_verdict_consistent(Verdict::Pass, &all(&[Low])));
    assert!(is_verdict_consistent(Verdict::Warn, &all(&[Medium, Low])));
    assert!(is_verdict_consistent(Verdict::Fail, &all(&[Low, High])));
    assert!(is_verdict_consistent(Verdict::Fail, &all(&[Critical])));
    assert!(!is_verdict_consistent(Verdict::Warn, &all(&[High])));
    assert!(!is_verdict_consistent(Verdict::Fail, &all(&[Medium])));
    assert!(!is_verdict_consistent(Verdict::Pass, &all(&[Medium])));
  }
}
