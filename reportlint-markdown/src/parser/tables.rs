//! Pipe table extraction.
use log::debug;

use super::heading;
use crate::types::{TOP_LEVEL_SECTION, Table};

/// Whether the line looks like `| a | b |`.
#[must_use]
pub fn is_table_row(line: &str) -> bool {
  let trimmed = line.trim();
  trimmed.len() > 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Whether the line is a header separator such as `|---|:--:|`.
#[must_use]
pub fn is_separator_row(line: &str) -> bool {
  let trimmed = line.trim();
  if !(trimmed.starts_with('|') && trimmed.ends_with('|')) {
    return false;
  }
  split_cells(trimmed).iter().all(|cell| {
    !cell.is_empty()
      && cell.contains('-')
      && cell.chars().all(|c| matches!(c, '-' | ':' | ' ' | '\t'))
  })
}

/// Split a pipe row into trimmed cells, dropping the outer pipes.
#[must_use]
pub fn split_cells(line: &str) -> Vec<String> {
  let trimmed = line.trim();
  let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
  let inner = inner.strip_suffix('|').unwrap_or(inner);
  inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Extract every table, tagged with the title of the closest heading above
/// it.
#[must_use]
pub fn extract_tables(lines: &[&str]) -> Vec<Table> {
  let mut tables = Vec::new();
  let mut current_title: Option<&str> = None;
  let mut i = 0;

  while i < lines.len() {
    if let Some((_, title)) = heading(lines[i]) {
      current_title = Some(title);
      i += 1;
      continue;
    }

    let starts_table = is_table_row(lines[i])
      && lines.get(i + 1).is_some_and(|next| is_separator_row(next));
    if !starts_table {
      i += 1;
      continue;
    }

    let headers = split_cells(lines[i]);
    i += 2;
    let mut rows = Vec::new();
    while i < lines.len() && is_table_row(lines[i]) {
      rows.push(split_cells(lines[i]));
      i += 1;
    }

    let section_title = current_title.unwrap_or(TOP_LEVEL_SECTION).to_string();
    debug!(
      "Table under '{section_title}': {} columns, {} rows",
      headers.len(),
      rows.len()
    );
    tables.push(Table {
      section_title,
      headers,
      rows,
    });
  }

  tables
}
