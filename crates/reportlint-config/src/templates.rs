use crate::error::ConfigError;

/// Default configuration template in TOML, commented so that a fresh file
/// explains itself.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# reportlint configuration file

# Directory holding stored role outputs, named "{role}--{fixture}.snap.md"
snapshot_dir = "tests/__snapshots__"

# Number of threads to use when validating many files (defaults to the number
# of CPU cores)
# jobs = 4

# Output format for reports: "text" or "json"
format = "text"

# Treat warnings as failures
strict = false

# Only validate snapshots for these roles (empty means every known role)
# roles = ["security-reviewer", "terraform-plan-reviewer"]
roles = []
"#;

/// Default configuration template in JSON.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "snapshot_dir": "tests/__snapshots__",
  "format": "text",
  "strict": false,
  "roles": []
}
"#;

/// Get the default configuration template for `format` (`toml` or `json`).
///
/// # Errors
///
/// Returns an error if the format is not supported.
pub fn get_template(format: &str) -> Result<&'static str, ConfigError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => {
      Err(ConfigError::Config(format!(
        "Unsupported config format: {format}"
      )))
    },
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;
  use crate::Config;

  #[test]
  fn templates_parse_back() {
    let from_toml: Config =
      toml::from_str(DEFAULT_TOML_TEMPLATE).expect("toml template parses");
    let from_json: Config =
      serde_json::from_str(DEFAULT_JSON_TEMPLATE).expect("json template parses");
    assert_eq!(from_toml.snapshot_dir, from_json.snapshot_dir);
    assert_eq!(from_toml.format, from_json.format);
    assert!(from_toml.roles.is_empty());
  }

  #[test]
  fn unknown_format() {
    assert!(get_template("yaml").is_err());
    assert!(get_template("TOML").is_ok());
  }
}
