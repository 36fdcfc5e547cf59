use std::{
  fmt,
  fs,
  path::{Path, PathBuf},
  str::FromStr,
  sync::OnceLock,
};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How validation reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// One block per file, for people.
  #[default]
  Text,
  /// A JSON array of results, for other tools.
  Json,
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Text => f.write_str("text"),
      Self::Json => f.write_str("json"),
    }
  }
}

impl FromStr for OutputFormat {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "text" => Ok(Self::Text),
      "json" => Ok(Self::Json),
      _ => {
        Err(ConfigError::Config(format!(
          "Invalid output format: '{s}'. Expected text or json"
        )))
      },
    }
  }
}

/// Configuration for reportlint.
///
/// Fields are loaded from a TOML or JSON config file and can be overridden
/// with `--config KEY=VALUE` on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Directory holding stored role outputs.
  pub snapshot_dir: PathBuf,

  /// Number of threads to use when validating many files.
  pub jobs: Option<usize>,

  /// Report format.
  pub format: OutputFormat,

  /// Whether warnings fail a run.
  pub strict: bool,

  /// Roles to validate in snapshot runs. Empty means all of them.
  pub roles: Vec<String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      snapshot_dir: PathBuf::from("tests/__snapshots__"),
      jobs:         None,
      format:       OutputFormat::Text,
      strict:       false,
      roles:        Vec::new(),
    }
  }
}

/// The keys one config file actually sets.
///
/// Files are read into layers and overlaid with [`Config::merge`], so a later
/// file only replaces what it mentions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
  pub snapshot_dir: Option<PathBuf>,
  pub jobs:         Option<usize>,
  pub format:       Option<OutputFormat>,
  pub strict:       Option<bool>,
  pub roles:        Option<Vec<String>>,
}

impl ConfigLayer {
  /// Read the keys set by a TOML or JSON file.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::Io`] if the file cannot be read,
  /// [`ConfigError::Toml`] or [`ConfigError::Serde`] if it does not parse, and
  /// [`ConfigError::Config`] for an unsupported extension.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
      return Err(ConfigError::Config(format!(
        "Config file has no extension: {}",
        path.display()
      )));
    };
    let ext = ext.to_lowercase();
    if ext != "json" && ext != "toml" {
      return Err(ConfigError::Config(format!(
        "Unsupported config file format: {}",
        path.display()
      )));
    }

    let content =
      fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    log::debug!("Read config file {}", path.display());

    if ext == "json" {
      serde_json::from_str(&content).map_err(|source| {
        ConfigError::Serde {
          path: path.to_path_buf(),
          source,
        }
      })
    } else {
      toml::from_str(&content).map_err(|source| {
        ConfigError::Toml {
          path: path.to_path_buf(),
          source,
        }
      })
    }
  }
}

impl Config {
  /// Load configuration from a file (TOML or JSON). Keys the file leaves out
  /// keep their defaults.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let mut config = Self::default();
    config.merge(ConfigLayer::from_file(path)?);
    Ok(config)
  }

  /// Load configuration from explicit files, or a discovered one, then apply
  /// `KEY=VALUE` overrides.
  ///
  /// Explicit files are merged in order, later files taking precedence. With
  /// no explicit files, [`Config::find_config_file`] is consulted, and with
  /// nothing found the defaults are used.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded, an override is malformed, or
  /// the result fails [`Config::validate`].
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged = Self::from_file(first)?;
      for path in rest {
        merged.merge(ConfigLayer::from_file(path)?);
      }
      if !rest.is_empty() {
        log::info!("Loaded and merged {} config files", config_files.len());
      }
      merged
    } else if let Some(discovered) = Self::find_config_file() {
      log::info!("Using discovered config file: {}", discovered.display());
      Self::from_file(&discovered)?
    } else {
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    config.validate()?;
    Ok(config)
  }

  /// Check values that parse fine but make no sense.
  ///
  /// # Errors
  ///
  /// Returns an error if `jobs` is zero.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.jobs == Some(0) {
      return Err(ConfigError::Config(
        "'jobs' must be at least 1".to_string(),
      ));
    }
    Ok(())
  }

  /// Apply configuration overrides from `KEY=VALUE` strings.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value cannot be parsed as the expected type
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a single override.
  ///
  /// # Errors
  ///
  /// Returns an error if the key is unknown or the value does not parse.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    match key {
      "snapshot_dir" => self.snapshot_dir = PathBuf::from(value),
      "jobs" => {
        self.jobs = if value.is_empty() {
          None
        } else {
          Some(value.parse().map_err(|_| {
            ConfigError::Config(format!(
              "Invalid value for 'jobs': '{value}'. Expected a positive \
               integer"
            ))
          })?)
        };
      },
      "format" => self.format = value.parse()?,
      "strict" => self.strict = parse_bool(key, value)?,
      "roles" => {
        self.roles = value
          .split(',')
          .map(str::trim)
          .filter(|role| !role.is_empty())
          .map(String::from)
          .collect();
      },
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'. See documentation for \
           supported keys."
        )));
      },
    }
    Ok(())
  }

  /// Overlay the keys a config file sets onto this config.
  ///
  /// # Merge Rules
  ///
  /// - Keys absent from `layer` are left alone
  /// - `roles` is appended, skipping duplicates
  /// - Every other key set in `layer` replaces this config's value
  pub fn merge(&mut self, layer: ConfigLayer) {
    if let Some(snapshot_dir) = layer.snapshot_dir {
      self.snapshot_dir = snapshot_dir;
    }
    if layer.jobs.is_some() {
      self.jobs = layer.jobs;
    }
    if let Some(format) = layer.format {
      self.format = format;
    }
    if let Some(strict) = layer.strict {
      self.strict = strict;
    }
    for role in layer.roles.into_iter().flatten() {
      if !self.roles.contains(&role) {
        self.roles.push(role);
      }
    }
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    static RESULT: OnceLock<Option<PathBuf>> = OnceLock::new();
    RESULT
      .get_or_init(|| {
        let current_dir = std::env::current_dir().ok()?;
        if let Some(found) = Self::find_config_file_in(&current_dir) {
          return Some(found);
        }

        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
          let xdg_config_dir = PathBuf::from(xdg_config_home);
          for filename in &["reportlint.toml", "reportlint.json"] {
            let config_path = xdg_config_dir.join(filename);
            if config_path.exists() {
              return Some(config_path);
            }
          }
        }

        if let Ok(home) = std::env::var("HOME") {
          let home_config_dir =
            PathBuf::from(home).join(".config").join("reportlint");
          for filename in &["config.toml", "config.json"] {
            let config_path = home_config_dir.join(filename);
            if config_path.exists() {
              return Some(config_path);
            }
          }
        }

        None
      })
      .clone()
  }

  /// Look for a config file directly under `dir`.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    const CONFIG_FILENAMES: [&str; 6] = [
      "reportlint.toml",
      "reportlint.json",
      ".reportlint.toml",
      ".reportlint.json",
      ".config/reportlint.toml",
      ".config/reportlint.json",
    ];

    CONFIG_FILENAMES
      .iter()
      .map(|filename| dir.join(filename))
      .find(|path| path.exists())
  }

  /// Write a default configuration file with commented explanations.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)?;

    fs::write(path, config_content).map_err(|e| ConfigError::io(path, e))?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.to_lowercase().as_str() {
    "true" | "yes" | "1" => Ok(true),
    "false" | "no" | "0" => Ok(false),
    _ => {
      Err(ConfigError::Config(format!(
        "Invalid boolean value for '{key}': '{value}'. Expected true/false, \
         yes/no, or 1/0"
      )))
    },
  }
}
