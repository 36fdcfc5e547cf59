//! Finding extraction.
//!
//! Two heading conventions start a finding:
//!
//! ```text
//! #### [CRITICAL] Hardcoded AWS key
//! ### 🟠 HIGH-1: Unbounded query
//! ```
//!
//! The emoji form starts from the severity of its emoji. A severity word or
//! priority code in the title replaces it, and an explicit
//! `**Severity: X**` line in the body replaces both.
use std::{ops::Range, sync::LazyLock};

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use crate::{
  types::{Finding, Severity},
  utils::compile,
};

static STRICT_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"^####\s+\[(?i:(CRITICAL|HIGH|MEDIUM|LOW))\]\s+(.+?)\s*$")
});
static FLEXIBLE_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"^###\s+(🔴|🟠|🟡|🔵)\x{FE0F}?\s+(.+?)\s*$")
});
static BODY_END_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^#{1,4}\s"));
static ANY_HEADING_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"^#{1,6}\s"));
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^-{3,}\s*$"));
static FIELD_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"^[-*]\s+\*\*([^*]+)\*\*:?\s*(.*)$"));
static SEVERITY_OVERRIDE_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)\*\*Severity:?(?:\*\*:?)?\s*(CRITICAL|HIGH|MEDIUM|LOW)\b")
});
static CWE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bCWE-\d+"));

/// A finding together with where it sits in the document.
#[derive(Debug, Clone)]
pub struct FindingBlock {
  /// Line index of the finding heading.
  pub heading:  usize,
  /// Line range of the body, excluding the heading.
  pub body:     Range<usize>,
  pub finding:  Finding,
}

/// Severity implied by an emoji marker.
#[must_use]
pub fn emoji_severity(emoji: &str) -> Option<Severity> {
  match emoji {
    "🔴" => Some(Severity::Critical),
    "🟠" => Some(Severity::High),
    "🟡" => Some(Severity::Medium),
    "🔵" => Some(Severity::Low),
    _ => None,
  }
}

/// Severity implied by words or priority codes in a finding title.
///
/// Checked from most to least severe, so a title carrying several signals
/// takes the most severe one.
#[must_use]
pub fn title_severity(title: &str) -> Option<Severity> {
  let upper = title.to_uppercase();
  let has = |needle: &str| upper.contains(needle);

  if has("CRITICAL") {
    Some(Severity::Critical)
  } else if has("HIGH") || has("P1") {
    Some(Severity::High)
  } else if has("MEDIUM") || has("P2") {
    Some(Severity::Medium)
  } else if has("LOW") || has("P3") || has("P4") {
    Some(Severity::Low)
  } else {
    None
  }
}

/// Match a finding heading, returning its initial severity and title.
fn finding_heading(line: &str) -> Option<(Severity, String)> {
  if let Some(caps) = STRICT_RE.captures(line) {
    let severity = caps.get(1)?.as_str().parse().ok()?;
    let title = caps.get(2)?.as_str().trim().to_string();
    return Some((severity, title));
  }

  let caps = FLEXIBLE_RE.captures(line)?;
  let title = caps.get(2)?.as_str().trim().to_string();
  let severity = title_severity(&title)
    .or_else(|| emoji_severity(caps.get(1)?.as_str()))?;
  Some((severity, title))
}

/// Whether line `i` ends the finding body that contains it.
fn ends_body(lines: &[&str], i: usize) -> bool {
  if BODY_END_RE.is_match(lines[i]) {
    return true;
  }
  RULE_RE.is_match(lines[i])
    && lines
      .get(i + 1)
      .is_some_and(|next| ANY_HEADING_RE.is_match(next))
}

fn starts_new_block(trimmed: &str) -> bool {
  trimmed.starts_with("- ")
    || trimmed.starts_with("* ")
    || trimmed.starts_with("```")
    || trimmed.starts_with("~~~")
}

/// Parse `- **Key:** value` items from a finding body.
///
/// A value continues onto following lines while they are indented and are
/// not a new list item, a code fence, another field or a heading. A blank
/// line ends the value.
#[must_use]
pub fn parse_fields(body: &[&str]) -> IndexMap<String, String> {
  let mut fields: IndexMap<String, String> = IndexMap::new();
  let mut last_key: Option<String> = None;

  for line in body {
    if let Some(caps) = FIELD_RE.captures(line) {
      let key = caps
        .get(1)
        .map(|m| m.as_str().trim().trim_end_matches(':').trim())
        .unwrap_or_default();
      if key.is_empty() {
        last_key = None;
        continue;
      }
      let value = caps.get(2).map_or("", |m| m.as_str().trim());
      fields.insert(key.to_string(), value.to_string());
      last_key = Some(key.to_string());
      continue;
    }

    let Some(key) = last_key.as_deref() else {
      continue;
    };

    let trimmed = line.trim();
    let indented = line.starts_with(' ') || line.starts_with('\t');
    if trimmed.is_empty()
      || !indented
      || starts_new_block(trimmed)
      || ANY_HEADING_RE.is_match(trimmed)
    {
      last_key = None;
      continue;
    }

    if let Some(value) = fields.get_mut(key) {
      if !value.is_empty() {
        value.push(' ');
      }
      value.push_str(trimmed);
    }
  }

  fields
}

/// The fence marker a line opens or closes with, e.g. "```" or "~~~~".
fn fence_marker(line: &str) -> Option<&str> {
  let trimmed = line.trim_start();
  let ch = trimmed.chars().next().filter(|c| matches!(c, '`' | '~'))?;
  let len = trimmed.len() - trimmed.trim_start_matches(ch).len();
  (len >= 3).then(|| &trimmed[..len])
}

/// Whether `body` holds a fenced code block with both its fences. A closing
/// fence uses the opening character at least as many times.
fn has_closed_fence(body: &[&str]) -> bool {
  let mut open: Option<&str> = None;
  for line in body {
    let Some(marker) = fence_marker(line) else {
      continue;
    };
    match open {
      Some(opening)
        if marker.starts_with(&opening[..1]) && marker.len() >= opening.len() =>
      {
        return true;
      },
      Some(_) => {},
      None => open = Some(marker),
    }
  }
  false
}

/// Extract every finding in document order.
#[must_use]
pub fn extract_findings(lines: &[&str]) -> Vec<FindingBlock> {
  let mut blocks = Vec::new();
  let mut i = 0;

  while i < lines.len() {
    let Some((mut severity, title)) = finding_heading(lines[i]) else {
      i += 1;
      continue;
    };

    let heading = i;
    i += 1;
    let start = i;
    while i < lines.len() && !ends_body(lines, i) {
      i += 1;
    }
    let body = &lines[start..i];

    // The last explicit severity line in the body wins
    for line in body {
      if let Some(explicit) = SEVERITY_OVERRIDE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
      {
        severity = explicit;
      }
    }

    let has_code_block = has_closed_fence(body);

    let cwe_reference = std::iter::once(title.as_str())
      .chain(body.iter().copied())
      .find_map(|line| CWE_RE.find(line))
      .map(|m| m.as_str().to_uppercase());

    debug!("Finding [{severity}] {title} (lines {start}..{i})");

    blocks.push(FindingBlock {
      heading,
      body: start..i,
      finding: Finding {
        severity,
        title,
        fields: parse_fields(body),
        has_code_block,
        cwe_reference,
      },
    });
  }

  blocks
}

/// For each line, the heading line of the finding whose body contains it.
#[must_use]
pub fn body_owners(blocks: &[FindingBlock], line_count: usize) -> Vec<Option<usize>> {
  let mut owners = vec![None; line_count];
  for block in blocks {
    for owner in &mut owners[block.body.clone()] {
      *owner = Some(block.heading);
    }
  }
  owners
}
