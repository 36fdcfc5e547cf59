//! Heading hierarchy.
use log::trace;

use super::heading;
use crate::types::Section;

/// A heading in the flat arena, before nesting.
struct Node<'a> {
  line:   usize,
  level:  u8,
  title:  &'a str,
  /// First line after the section span.
  end:    usize,
  parent: Option<usize>,
}

/// Build the section forest for `lines`.
///
/// `owners` maps each line to the heading line of the finding whose body
/// contains it (see [`super::findings::body_owners`]). Finding bodies that
/// start below a section heading are left out of that section's content.
#[must_use]
pub fn build_section_tree(
  lines: &[&str],
  owners: &[Option<usize>],
) -> Vec<Section> {
  let mut nodes: Vec<Node<'_>> = Vec::new();
  let mut stack: Vec<usize> = Vec::new();

  for (line, text) in lines.iter().enumerate() {
    let Some((level, title)) = heading(text) else {
      continue;
    };

    while let Some(&top) = stack.last() {
      if nodes[top].level < level {
        break;
      }
      nodes[top].end = line;
      stack.pop();
    }

    nodes.push(Node {
      line,
      level,
      title,
      end: lines.len(),
      parent: stack.last().copied(),
    });
    stack.push(nodes.len() - 1);
  }

  let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
  let mut roots = Vec::new();
  for (idx, node) in nodes.iter().enumerate() {
    match node.parent {
      Some(parent) => children[parent].push(idx),
      None => roots.push(idx),
    }
  }

  // Children always come after their parent, so a reverse pass sees every
  // child built before its parent needs it
  let mut built: Vec<Option<Section>> = Vec::with_capacity(nodes.len());
  built.resize_with(nodes.len(), || None);
  for idx in (0..nodes.len()).rev() {
    let node = &nodes[idx];
    let subsections = children[idx]
      .iter()
      .filter_map(|&child| built[child].take())
      .collect();
    trace!("Section '{}' spans lines {}..{}", node.title, node.line, node.end);
    built[idx] = Some(Section {
      level: node.level,
      title: node.title.to_string(),
      content: section_content(lines, owners, node.line, node.end),
      subsections,
    });
  }

  roots
    .into_iter()
    .filter_map(|idx| built[idx].take())
    .collect()
}

fn section_content(
  lines: &[&str],
  owners: &[Option<usize>],
  heading_line: usize,
  end: usize,
) -> String {
  let body: Vec<&str> = (heading_line + 1..end)
    .filter(|&i| {
      owners
        .get(i)
        .copied()
        .flatten()
        .is_none_or(|owner| owner <= heading_line)
    })
    .map(|i| lines[i])
    .collect();
  body.join("\n").trim().to_string()
}
