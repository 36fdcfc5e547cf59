//! Technical writer documents, validated per detected [`DocType`].
use std::sync::LazyLock;

use regex::Regex;
use reportlint_markdown::{ParsedDocument, parse, utils::compile};

use crate::{
  detect::{DocType, detect_doc_type},
  result::{Report, ValidationResult},
  rules::has_any_section,
};

static CODE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)```.*?```"));
static SHELL_BLOCK_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?s)```(bash|sh|shell).*?```"));
static BEFORE_AFTER_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(r"(?i)before.*\(v|after.*\(v|before:.*\n.*```|after:.*\n.*```")
});
static STEPS_RE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)migration steps|step \d+|1\.\s"));

const CHANGE_KINDS: &[&str] = &["Added", "Changed", "Fixed", "Removed", "Deprecated"];

fn api_doc(text: &str, doc: &ParsedDocument, report: &mut Report) {
  report.error_unless(
    has_any_section(doc, &["Quick Start", "Examples"]),
    "API Documentation must include a \"Quick Start\" or \"Examples\" section",
  );
  report.warn_unless(
    has_any_section(doc, &["Parameters"]),
    "Missing \"Parameters\" section",
  );
  report.warn_unless(
    has_any_section(doc, &["Response", "Return Value"]),
    "Missing \"Response\" or \"Return Value\" section",
  );
  report.error_unless(
    CODE_BLOCK_RE.is_match(text),
    "API Documentation must include code examples",
  );
}

fn migration_guide(text: &str, doc: &ParsedDocument, report: &mut Report) {
  report.error_unless(
    has_any_section(doc, &["Breaking Changes"]),
    "Migration Guide must include \"Breaking Changes\" section",
  );
  report.warn_unless(
    BEFORE_AFTER_RE.is_match(text),
    "Migration Guide should include before/after code examples",
  );
  report.warn_unless(
    STEPS_RE.is_match(text),
    "Migration Guide should include migration steps",
  );
}

fn changelog(doc: &ParsedDocument, report: &mut Report) {
  report.error_unless(
    has_any_section(doc, CHANGE_KINDS),
    "Changelog must include at least one of: Added, Changed, Fixed, Removed, \
     Deprecated",
  );
}

fn readme(text: &str, doc: &ParsedDocument, report: &mut Report) {
  report.error_unless(
    has_any_section(doc, &["Quick Start", "Getting Started"]),
    "README must include \"Quick Start\" or \"Getting Started\" section",
  );
  report.warn_unless(
    SHELL_BLOCK_RE.is_match(text),
    "README Quick Start should include bash commands",
  );
}

fn doc_inventory(doc: &ParsedDocument, report: &mut Report) {
  report.error_unless(
    has_any_section(doc, &["Coverage Assessment", "Coverage"]),
    "Documentation Inventory must include \"Coverage Assessment\" section",
  );
  report.warn_unless(has_any_section(doc, &["Gaps"]), "Missing \"Gaps\" section");
  report.warn_unless(
    has_any_section(doc, &["Recommendations"]),
    "Missing \"Recommendations\" section",
  );
}

fn user_guide(doc: &ParsedDocument, report: &mut Report) {
  report.warn_unless(
    has_any_section(doc, &["What It Does", "Overview"]),
    "User Guide should include \"What It Does\" or \"Overview\" section",
  );
  report.warn_unless(
    has_any_section(doc, &["Getting Started", "Quick Start"]),
    "Missing \"Getting Started\" section",
  );
}

#[must_use]
pub fn validate(text: &str) -> ValidationResult {
  let doc = parse(text);
  let mut report = Report::new();

  match detect_doc_type(text) {
    DocType::ApiDoc => api_doc(text, &doc, &mut report),
    DocType::MigrationGuide => migration_guide(text, &doc, &mut report),
    DocType::Changelog => changelog(&doc, &mut report),
    DocType::Readme => readme(text, &doc, &mut report),
    DocType::DocInventory => doc_inventory(&doc, &mut report),
    DocType::UserGuide => user_guide(&doc, &mut report),
    DocType::Unknown => {
      report.warning(
        "Could not detect documentation type (unable to validate structure)",
      );
    },
  }

  report.finish()
}
