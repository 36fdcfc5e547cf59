//! The outcome of validating one document.
use serde::{Deserialize, Serialize};

/// How serious a reported problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
  /// A structural defect. Makes the result invalid.
  Error,
  /// Stylistic drift. Reported, never blocks.
  Warning,
}

/// Result of validating a document against a rule set.
///
/// `valid` is always `errors.is_empty()`. Warnings never affect it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
  pub valid:    bool,
  pub errors:   Vec<String>,
  pub warnings: Vec<String>,
}

impl ValidationResult {
  #[must_use]
  pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
    Self {
      valid: errors.is_empty(),
      errors,
      warnings,
    }
  }

  /// Whether the result passes, counting warnings as failures when `strict`.
  #[must_use]
  pub fn passes(&self, strict: bool) -> bool {
    self.valid && (!strict || self.warnings.is_empty())
  }

  /// Whether any error message contains `needle`.
  #[must_use]
  pub fn has_error(&self, needle: &str) -> bool {
    self.errors.iter().any(|e| e.contains(needle))
  }

  /// Whether any warning message contains `needle`.
  #[must_use]
  pub fn has_warning(&self, needle: &str) -> bool {
    self.warnings.iter().any(|w| w.contains(needle))
  }
}

/// Collects errors and warnings while a validator runs.
#[derive(Debug, Default)]
pub struct Report {
  errors:   Vec<String>,
  warnings: Vec<String>,
}

impl Report {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, level: Level, message: impl Into<String>) {
    match level {
      Level::Error => self.errors.push(message.into()),
      Level::Warning => self.warnings.push(message.into()),
    }
  }

  pub fn error(&mut self, message: impl Into<String>) {
    self.push(Level::Error, message);
  }

  pub fn warning(&mut self, message: impl Into<String>) {
    self.push(Level::Warning, message);
  }

  /// Record a warning unless `ok` holds.
  pub fn warn_unless(&mut self, ok: bool, message: impl Into<String>) {
    if !ok {
      self.warning(message);
    }
  }

  /// Record an error unless `ok` holds.
  pub fn error_unless(&mut self, ok: bool, message: impl Into<String>) {
    if !ok {
      self.error(message);
    }
  }

  #[must_use]
  pub fn finish(self) -> ValidationResult {
    ValidationResult::new(self.errors, self.warnings)
  }
}
