//! Lookups over a parsed document.
//!
//! Title matching is a case-insensitive substring match everywhere in this
//! module, so `"cost"` finds both `## Cost Impact` and `### Estimated Cost`.
use crate::types::{Section, Table};

fn title_matches(title: &str, needle_lower: &str) -> bool {
  title.to_lowercase().contains(needle_lower)
}

/// First section whose title contains `needle`, searching depth-first in
/// document order.
#[must_use]
pub fn find_section<'a>(sections: &'a [Section], needle: &str) -> Option<&'a Section> {
  fn walk<'a>(sections: &'a [Section], needle: &str) -> Option<&'a Section> {
    sections.iter().find_map(|section| {
      if title_matches(&section.title, needle) {
        Some(section)
      } else {
        walk(&section.subsections, needle)
      }
    })
  }
  walk(sections, &needle.to_lowercase())
}

/// Every section whose title contains `needle`, in document order.
#[must_use]
pub fn find_all_sections<'a>(sections: &'a [Section], needle: &str) -> Vec<&'a Section> {
  fn walk<'a>(sections: &'a [Section], needle: &str, out: &mut Vec<&'a Section>) {
    for section in sections {
      if title_matches(&section.title, needle) {
        out.push(section);
      }
      walk(&section.subsections, needle, out);
    }
  }
  let mut out = Vec::new();
  walk(sections, &needle.to_lowercase(), &mut out);
  out
}

/// First section matching any alias, trying the aliases in order.
#[must_use]
pub fn find_any_section<'a>(
  sections: &'a [Section],
  aliases: &[&str],
) -> Option<&'a Section> {
  aliases
    .iter()
    .find_map(|alias| find_section(sections, alias))
}

/// Titles of all sections in document order, optionally only those at
/// `level`.
#[must_use]
pub fn section_titles(sections: &[Section], level: Option<u8>) -> Vec<String> {
  fn walk(sections: &[Section], level: Option<u8>, out: &mut Vec<String>) {
    for section in sections {
      if level.is_none_or(|l| l == section.level) {
        out.push(section.title.clone());
      }
      walk(&section.subsections, level, out);
    }
  }
  let mut out = Vec::new();
  walk(sections, level, &mut out);
  out
}

/// First table whose section title contains `needle`.
#[must_use]
pub fn find_table<'a>(tables: &'a [Table], needle: &str) -> Option<&'a Table> {
  let needle = needle.to_lowercase();
  tables
    .iter()
    .find(|table| title_matches(&table.section_title, &needle))
}
