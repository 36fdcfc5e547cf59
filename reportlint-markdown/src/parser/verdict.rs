//! Verdict detection.
//!
//! Generators phrase the verdict in many ways:
//!
//! ```text
//! ## Terraform Plan Review Verdict: FAIL
//! # 🔴 TERRAFORM PLAN REVIEW — FAIL
//! ### Verdict: ⚠️ WARN
//! > **⚠️ WARN — Approve with Conditions**
//! **Verdict:** ✅ PASS
//! ```
//!
//! Detection is an ordered rule table. Each rule scans the whole document and
//! the first rule that matches any line decides the verdict.
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::{types::Verdict, utils::compile};

/// A named verdict rule, applied to one line at a time.
pub struct VerdictRule {
  pub name:    &'static str,
  pub matcher: fn(&str) -> Option<Verdict>,
}

/// Verdict rules in priority order.
pub const VERDICT_RULES: &[VerdictRule] = &[
  VerdictRule {
    name:    "strict verdict heading",
    matcher: strict_heading,
  },
  VerdictRule {
    name:    "verdict keyword",
    matcher: verdict_keyword_line,
  },
  VerdictRule {
    name:    "heading",
    matcher: heading_line,
  },
  VerdictRule {
    name:    "bold span",
    matcher: bold_span,
  },
  VerdictRule {
    name:    "blockquote",
    matcher: blockquote_line,
  },
  VerdictRule {
    name:    "emoji indicator",
    matcher: emoji_line,
  },
];

static STRICT_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(
    r"^##\s+(?:Terraform Plan Review|Security Review)\s+Verdict:\s+(PASS|WARN|FAIL)\s*$",
  )
});
static VERDICT_WORD_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)verdict"));
static HEADING_PREFIX_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"^#{1,4}\s"));
static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^>\s"));

static FAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bFAIL\b"));
static WARN_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bWARN\b"));
static PASS_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bPASS\b"));

static BOLD_FAIL_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)\*\*.*?\bFAIL\b.*?\*\*"));
static BOLD_WARN_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)\*\*.*?\bWARN\b.*?\*\*"));
static BOLD_PASS_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)\*\*.*?\bPASS\b.*?\*\*"));

static FAIL_EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| compile("[❌🔴🚨]"));
static WARN_EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| compile("[⚠🟡🟠]"));
static PASS_EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| compile("[✅🟢]"));

/// Run the rule table over the document lines.
///
/// Returns the verdict and the trimmed line it was read from.
#[must_use]
pub fn extract_verdict(lines: &[&str]) -> Option<(Verdict, String)> {
  VERDICT_RULES.iter().find_map(|rule| {
    lines.iter().find_map(|line| {
      (rule.matcher)(line).map(|verdict| {
        debug!("Verdict {verdict} from rule '{}': {line}", rule.name);
        (verdict, line.trim().to_string())
      })
    })
  })
}

/// Strongest whole-word verdict keyword on the line: FAIL, then WARN, then
/// PASS.
fn strongest_keyword(line: &str) -> Option<Verdict> {
  if FAIL_RE.is_match(line) {
    Some(Verdict::Fail)
  } else if WARN_RE.is_match(line) {
    Some(Verdict::Warn)
  } else if PASS_RE.is_match(line) {
    Some(Verdict::Pass)
  } else {
    None
  }
}

fn strict_heading(line: &str) -> Option<Verdict> {
  let caps = STRICT_RE.captures(line)?;
  caps.get(1)?.as_str().parse().ok()
}

fn verdict_keyword_line(line: &str) -> Option<Verdict> {
  VERDICT_WORD_RE
    .is_match(line)
    .then(|| strongest_keyword(line))
    .flatten()
}

fn heading_line(line: &str) -> Option<Verdict> {
  HEADING_PREFIX_RE
    .is_match(line)
    .then(|| strongest_keyword(line))
    .flatten()
}

fn bold_span(line: &str) -> Option<Verdict> {
  if BOLD_FAIL_RE.is_match(line) {
    Some(Verdict::Fail)
  } else if BOLD_WARN_RE.is_match(line) {
    Some(Verdict::Warn)
  } else if BOLD_PASS_RE.is_match(line) {
    Some(Verdict::Pass)
  } else {
    None
  }
}

fn blockquote_line(line: &str) -> Option<Verdict> {
  BLOCKQUOTE_RE
    .is_match(line)
    .then(|| strongest_keyword(line))
    .flatten()
}

fn emoji_line(line: &str) -> Option<Verdict> {
  if FAIL_EMOJI_RE.is_match(line) && FAIL_RE.is_match(line) {
    Some(Verdict::Fail)
  } else if WARN_EMOJI_RE.is_match(line) && WARN_RE.is_match(line) {
    Some(Verdict::Warn)
  } else if PASS_EMOJI_RE.is_match(line) && PASS_RE.is_match(line) {
    Some(Verdict::Pass)
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn verdict_of(text: &str) -> Option<Verdict> {
    let lines: Vec<&str> = text.lines().collect();
    extract_verdict(&lines).map(|(v, _)| v)
  }

  #[test]
  fn strict_heading_wins_over_earlier_lines() {
    let text = "**Everything PASS here**\n## Security Review Verdict: FAIL";
    assert_eq!(verdict_of(text), Some(Verdict::Fail));
  }

  #[test]
  fn verdict_keyword_prefers_fail() {
    assert_eq!(
      verdict_of("Verdict: PASS unless this is a FAIL"),
      Some(Verdict::Fail)
    );
  }

  #[test]
  fn keyword_must_be_whole_word() {
    assert_eq!(verdict_of("Verdict: FAILURE TO LAUNCH"), None);
    assert_eq!(verdict_of("The tests passed"), None);
  }

  #[test]
  fn heading_rule_is_limited_to_four_levels() {
    assert_eq!(verdict_of("#### Result WARN"), Some(Verdict::Warn));
    assert_eq!(verdict_of("##### Result WARN"), None);
  }

  #[test]
  fn bold_blockquote_and_emoji_rules() {
    assert_eq!(verdict_of("Outcome: **PASS**"), Some(Verdict::Pass));
    assert_eq!(verdict_of("> WARN with conditions"), Some(Verdict::Warn));
    assert_eq!(verdict_of("🚨 FAIL"), Some(Verdict::Fail));
    assert_eq!(verdict_of("🟢 PASS"), Some(Verdict::Pass));
  }

  #[test]
  fn emoji_without_keyword_is_ignored() {
    assert_eq!(verdict_of("✅ all good"), None);
  }

  #[test]
  fn rule_order_beats_line_order() {
    // The heading rule outranks the bold rule even though the bold line comes
    // first.
    let text = "**FAIL**\n\n## Outcome: PASS";
    assert_eq!(verdict_of(text), Some(Verdict::Pass));
  }
}
