//! # reportlint-roles
//!
//! Structural validators for the reports written by advisory roles. Each
//! role parses its input with [`reportlint_markdown::parse`] and checks the
//! result against a rule set, reporting structural defects as errors and
//! stylistic drift as warnings.
//!
//! ```rust
//! use reportlint_roles::Role;
//!
//! let result = Role::ArchitectAdr
//!   .validate("# ADR-001: Use Redis\n\n## Status\nAccepted\n\n## Context\nSome context\n");
//!
//! assert!(!result.valid);
//! assert!(result.has_error("Decision"));
//! ```
//!
//! Validators never fail. A document that cannot be recognised at all simply
//! produces the full set of "missing" diagnostics for its role.

pub mod detect;
mod role;
pub mod roles;
mod result;
pub mod rules;

pub use crate::{
  detect::{ArtifactType, DocType, detect_artifact_type, detect_doc_type},
  result::{Level, Report, ValidationResult},
  role::{Role, UnknownRole},
};
