use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reportlint_config::OutputFormat;
use reportlint_roles::Role;

/// Command line interface for reportlint
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Validate the structure of markdown reports written by advisory roles"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", global = true, action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", global = true, action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// Options shared by the commands that validate files.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RunArgs {
  /// Report format. Defaults to the configured format.
  #[arg(short = 'F', long)]
  pub format: Option<OutputFormat>,

  /// Treat warnings as failures.
  #[arg(short, long)]
  pub strict: bool,

  /// Number of threads to use for parallel validation.
  #[arg(short = 'p', long = "jobs")]
  pub jobs: Option<usize>,
}

/// All supported subcommands for the reportlint CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Validate markdown files as the output of one role.
  Check {
    /// Role whose rules apply (see `reportlint roles`).
    #[arg(short, long)]
    role: Role,

    /// Markdown files, or directories to search for `.md` files.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    #[command(flatten)]
    run: RunArgs,
  },

  /// Validate every stored snapshot in a directory.
  Snapshots {
    /// Snapshot directory. Defaults to the configured `snapshot_dir`.
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Only validate snapshots of this role.
    #[arg(short, long)]
    role: Option<Role>,

    #[command(flatten)]
    run: RunArgs,
  },

  /// Print the parsed structure of a markdown file as JSON.
  Parse {
    /// Markdown file to parse.
    file: PathBuf,
  },

  /// Print the document type a role would validate a file as.
  Detect {
    /// Role to classify for (technical-writer or ux-researcher).
    #[arg(short, long)]
    role: Role,

    /// Markdown file to classify.
    file: PathBuf,
  },

  /// List the known roles.
  Roles,

  /// Initialize a new reportlint configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "reportlint.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]

  use clap::CommandFactory;

  use super::*;

  #[test]
  fn definition_is_consistent() {
    Cli::command().debug_assert();
  }

  #[test]
  fn check_parses_role_and_flags() {
    let cli = Cli::try_parse_from([
      "reportlint",
      "check",
      "--role",
      "security-reviewer",
      "--strict",
      "-F",
      "json",
      "a.md",
      "b.md",
    ])
    .expect("valid arguments");
    let Commands::Check { role, paths, run } = cli.command else {
      panic!("expected check");
    };
    assert_eq!(role, Role::SecurityReviewer);
    assert_eq!(paths.len(), 2);
    assert!(run.strict);
    assert_eq!(run.format, Some(OutputFormat::Json));
  }

  #[test]
  fn unknown_role_is_rejected() {
    assert!(
      Cli::try_parse_from(["reportlint", "check", "--role", "wizard", "a.md"])
        .is_err()
    );
  }

  #[test]
  fn global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
      "reportlint",
      "roles",
      "-v",
      "--config",
      "strict=true",
    ])
    .expect("valid arguments");
    assert!(cli.verbose);
    assert_eq!(cli.config_overrides, vec!["strict=true"]);
  }
}
