//! Retrospectives.
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{
  ParsedDocument,
  Section,
  find_all_sections,
  find_section,
  parse,
  utils::compile,
};

use crate::{
  result::{Report, ValidationResult},
  rules::{RuleSet, SectionGroup, has_any_section, table_under},
};

/// Improvement items allowed per retrospective.
pub const MAX_IMPROVEMENT_ITEMS: usize = 3;

const CELEBRATION: &[&str] = &["Celebration", "Wins", "Celebrate", "What Went Well"];

pub const RULES: RuleSet = RuleSet {
  sections: &[
    SectionGroup::expected(&[
      "Previous Improvement Items",
      "Follow-Up",
      "Previous Items",
      "Last Retro Follow-Up",
    ]),
    SectionGroup::expected(&[
      "Planned vs. Actual",
      "Execution Summary",
      "Planned vs Actual",
      "Delivery Analysis",
    ]),
    SectionGroup::expected(&[
      "Improvement Items",
      "Improvements",
      "Action Items",
      "Next Steps",
    ]),
    SectionGroup::expected(CELEBRATION),
  ],
  ..RuleSet::EMPTY
};

/// Start/Stop/Continue, 4Ls and Sailboat.
const FORMATS: &[&[&str]] = &[
  &["Start", "Stop", "Continue"],
  &["Liked", "Learned", "Lacked", "Longed For"],
  &["Wind", "Anchor", "Rocks", "Island"],
];

static RETRO_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)retro"));
static BLAME_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)\b(he|she|they)\s+(failed|forgot|missed|didn't|should have)\b")
});

fn has_format_sections(doc: &ParsedDocument) -> bool {
  FORMATS.iter().any(|format| {
    format
      .iter()
      .filter(|name| find_section(&doc.sections, name).is_some())
      .count()
      >= 2
  })
}

/// The section holding this retrospective's improvement items. Sections
/// following up on the previous retrospective's items are skipped.
fn improvement_section(doc: &ParsedDocument) -> Option<&Section> {
  ["Improvement Items", "Improvements", "Action Items"]
    .iter()
    .find_map(|name| {
      find_all_sections(&doc.sections, name)
        .into_iter()
        .find(|s| !s.title.to_lowercase().contains("previous"))
    })
}

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();

  report.warn_unless(
    RETRO_RE.is_match(text),
    "Output does not appear to be a Retrospective document",
  );

  RULES.check(&doc, &mut report);

  report.warn_unless(
    has_format_sections(&doc),
    "No recognizable retrospective format sections found (expected \
     Start/Stop/Continue, 4Ls, or Sailboat)",
  );

  if let Some(section) = improvement_section(&doc) {
    let count = section.subsections.len();
    if count > MAX_IMPROVEMENT_ITEMS {
      report.warning(format!(
        "Too many improvement items: {count} (maximum should be \
         {MAX_IMPROVEMENT_ITEMS})"
      ));
    }
  }

  if has_any_section(&doc, &["Previous Improvement Items", "Follow-Up", "Previous Items"])
    && let Some(table) = table_under(&doc.tables, &["previous", "follow"])
  {
    report.warn_unless(
      table.has_column(&["status"]),
      "Previous Improvement Items table missing Status column",
    );
  }

  report.warn_unless(
    has_any_section(&doc, CELEBRATION),
    "Missing Celebration section (retrospectives must make room to celebrate \
     wins)",
  );

  if BLAME_RE.is_match(text) {
    report.warning(
      "Output may contain blame language (retrospectives should focus on \
       systems and processes, not individuals)",
    );
  }

  report.finish()
}
