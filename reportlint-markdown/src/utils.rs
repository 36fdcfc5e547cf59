use regex::Regex;

/// Compile a pattern, falling back to [`never_matching_regex`] if it does not
/// compile.
///
/// The error is logged. Callers never see a failure.
#[must_use]
pub fn compile(pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| {
    log::error!("Invalid built-in pattern {pattern:?}: {e}");
    never_matching_regex()
  })
}

/// Create a regex that never matches anything.
///
/// # Panics
///
/// Panics if the fallback regex pattern `r"^\b$"` fails to compile, which
/// should never happen.
#[must_use]
#[allow(clippy::unwrap_used, reason = "Both patterns are known to be valid")]
pub fn never_matching_regex() -> Regex {
  // Asserts something impossible, so it matches nothing, not even ""
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| Regex::new(r"^\b$").unwrap())
}

/// Split text into lines the way the report generators write them: on `\n`,
/// dropping a trailing `\r` from each line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
  text
    .split('\n')
    .map(|line| line.strip_suffix('\r').unwrap_or(line))
    .collect()
}

/// Case-insensitive substring check.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}
