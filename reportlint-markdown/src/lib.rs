//! # reportlint-markdown
//!
//! A tolerant markdown parser for the semi-structured reports written by
//! advisory roles (security reviews, terraform plan reviews, retrospectives
//! and so on). It recovers the pieces those reports are built from:
//!
//! - **Sections**: an ATX heading hierarchy with the text under each heading
//! - **Findings**: severity-tagged blocks with bold `**Key:** value` fields
//! - **Tables**: pipe tables, tagged with the heading they appear under
//! - **Verdict**: the PASS/WARN/FAIL outcome, detected through a prioritised
//!   list of heuristics
//!
//! The parser never fails. Anything it cannot recognise is left out of the
//! result, and it is up to the caller to decide whether that is a problem.
//!
//! ## Quick Start
//!
//! ```rust
//! use reportlint_markdown::{Severity, Verdict, parse};
//!
//! let doc = parse(
//!   "## Security Review Verdict: FAIL\n\n#### [CRITICAL] Hardcoded Key\n- \
//!    **CWE:** CWE-798\n",
//! );
//!
//! assert_eq!(doc.verdict, Some(Verdict::Fail));
//! assert_eq!(doc.findings[0].severity, Severity::Critical);
//! assert_eq!(doc.findings[0].cwe_reference.as_deref(), Some("CWE-798"));
//! ```
//!
//! ## Severity model
//!
//! ```rust
//! use reportlint_markdown::{parse, severity};
//!
//! let doc = parse("#### [HIGH] One\n\n#### [CRITICAL] Two\n");
//! assert!(!severity::are_findings_sorted(&doc.findings));
//! ```

pub mod parser;
pub mod query;
pub mod severity;
mod types;
pub mod utils;

pub use crate::{
  parser::parse,
  query::{
    find_all_sections,
    find_any_section,
    find_section,
    find_table,
    section_titles,
  },
  severity::{
    are_findings_sorted,
    expected_verdict,
    is_verdict_consistent,
    max_severity,
  },
  types::{
    Finding,
    ParseEnumError,
    ParsedDocument,
    RoleHint,
    Section,
    Severity,
    TOP_LEVEL_SECTION,
    Table,
    Verdict,
  },
};
