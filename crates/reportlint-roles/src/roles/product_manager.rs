//! Product manager agent definitions.
//!
//! These check the definition of the agent rather than anything it wrote.
//! A product manager running as a sub-agent can only reach the human through
//! the `AskUserQuestion` tool, so the definition has to say so in the right
//! places.
use reportlint_markdown::{ParsedDocument, find_all_sections, parse};

use crate::result::{Report, ValidationResult};

const TOOL: &str = "AskUserQuestion";

/// Level-2 sections that must exist and mention the tool, with the reason
/// reported when they do not.
const GUIDED_SECTIONS: &[(&str, &str)] = &[
  (
    "Requirements Gathering",
    "This is the primary section that instructs the PM on how to ask \
     questions.",
  ),
  (
    "Critical Rules",
    "This section must reinforce the AskUserQuestion requirement.",
  ),
  (
    "Behavioral Rules",
    "This section must include guidance on using AskUserQuestion.",
  ),
];

/// Text of the first `## ` section whose title starts with `name`,
/// subsections included. A heading with nothing under it counts as missing.
fn level_two_section(doc: &ParsedDocument, name: &str) -> Option<String> {
  find_all_sections(&doc.sections, name)
    .into_iter()
    .find(|s| s.level == 2 && s.title.starts_with(name))
    .map(reportlint_markdown::Section::full_content)
    .filter(|content| !content.trim().is_empty())
}

/// Validate the product manager agent definition.
#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();

  report.error_unless(
    text.contains(TOOL),
    "Agent definition does not mention AskUserQuestion. The PM must use this \
     tool to surface questions to the human user when running as a sub-agent.",
  );

  for (name, reason) in GUIDED_SECTIONS {
    match level_two_section(&doc, name) {
      None => report.error(format!("Missing \"{name}\" section")),
      Some(content) if !content.contains(TOOL) => {
        report.error(format!(
          "{name} section does not mention AskUserQuestion. {reason}"
        ));
      },
      Some(_) => {},
    }
  }

  report.warn_unless(
    text.contains("text output") || text.contains("plain text"),
    "Agent definition does not explicitly warn against using plain text \
     output for questions. Consider adding guidance that text output goes to \
     the parent agent, not the user.",
  );
  report.warn_unless(
    text.contains("sub-agent") || text.contains("subagent"),
    "Agent definition does not mention sub-agent context. Consider explaining \
     why AskUserQuestion is needed (text output goes to parent agent).",
  );

  report.finish()
}

/// Validate the `write-implementation-plan` command definition.
#[must_use]
pub fn validate_plan_command(text: &str) -> ValidationResult {
  let mut report = Report::new();
  report.error_unless(
    text.contains(TOOL),
    "write-implementation-plan command does not mention AskUserQuestion. \
     Step 4 (User Interview) must instruct the PM to use AskUserQuestion.",
  );
  report.finish()
}
