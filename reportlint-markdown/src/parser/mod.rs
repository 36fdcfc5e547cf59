//! Line-oriented markdown structure parser.
//!
//! The parser is split into focused submodules, each a single pass over the
//! document lines:
//!
//! - [`verdict`]: prioritised verdict detection rules
//! - [`hint`]: role hint inference
//! - [`findings`]: severity-tagged finding blocks and their fields
//! - [`sections`]: the heading hierarchy
//! - [`tables`]: pipe tables
//!
//! Findings are extracted before sections because section content leaves out
//! the finding bodies that start below the section heading.
pub mod findings;
pub mod hint;
pub mod sections;
pub mod tables;
pub mod verdict;

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::{types::ParsedDocument, utils};

/// An ATX heading: level and title text.
static HEADING_RE: LazyLock<Regex> =
  LazyLock::new(|| utils::compile(r"^(#{1,6})\s+(.+?)\s*$"));

/// Split a heading line into its level and trimmed title.
pub(crate) fn heading(line: &str) -> Option<(u8, &str)> {
  let caps = HEADING_RE.captures(line)?;
  let hashes = caps.get(1)?.as_str();
  let title = caps.get(2)?.as_str().trim();
  let level = u8::try_from(hashes.len()).ok()?;
  Some((level, title))
}

/// Parse a markdown report into its structural pieces.
///
/// This never fails. Constructs that do not match what the parser looks for
/// are skipped, so the worst case is a document with no sections, findings
/// or tables and no verdict.
///
/// # Examples
///
/// ```
/// use reportlint_markdown::parse;
///
/// let doc = parse("## Coverage Report\n\n| A | B |\n|---|---|\n| 1 | 2 |\n");
/// assert_eq!(doc.tables[0].section_title, "Coverage Report");
/// assert_eq!(doc.tables[0].rows, vec![vec!["1", "2"]]);
/// ```
#[must_use]
pub fn parse(text: &str) -> ParsedDocument {
  let lines = utils::split_lines(text);

  let (verdict, verdict_line) = match verdict::extract_verdict(&lines) {
    Some((verdict, line)) => (Some(verdict), Some(line)),
    None => (None, None),
  };
  let role_hint = hint::infer_role_hint(text);

  let blocks = findings::extract_findings(&lines);
  let owners = findings::body_owners(&blocks, lines.len());
  let sections = sections::build_section_tree(&lines, &owners);
  let tables = tables::extract_tables(&lines);

  debug!(
    "Parsed document: verdict={verdict:?}, hint={role_hint}, {} root \
     sections, {} findings, {} tables",
    sections.len(),
    blocks.len(),
    tables.len()
  );

  ParsedDocument {
    verdict_line,
    verdict,
    role_hint,
    sections,
    findings: blocks.into_iter().map(|b| b.finding).collect(),
    tables,
    raw_text: text.to_string(),
  }
}
