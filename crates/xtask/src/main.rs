#![allow(clippy::print_stdout, reason = "Task progress goes to stdout")]
use std::{
  fmt::Write as _,
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use reportlint::cli::Cli;
use reportlint_roles::Role;

const BIN: &str = "reportlint";

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build distribution artifacts for the reportlint CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Only generate shell completions.
    #[arg(long, conflicts_with = "manpage_only")]
    completions_only: bool,

    /// Only generate manpage.
    #[arg(long, conflicts_with = "completions_only")]
    manpage_only: bool,
  },

  /// Write the markdown list of roles shipped in the docs.
  RoleList {
    #[arg(short, long, default_value = "docs/roles.md")]
    output: PathBuf,
  },
}

fn main() -> Result<()> {
  match Xtask::parse().command {
    Commands::Dist {
      output_dir,
      completions_only,
      manpage_only,
    } => {
      if !manpage_only {
        generate_completions(&output_dir)?;
      }
      if !completions_only {
        generate_manpage(&output_dir)?;
      }
    },
    Commands::RoleList { output } => write_role_list(&output)?,
  }

  Ok(())
}

fn generate_completions(output_dir: &Path) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir)?;
  let mut cmd = Cli::command();
  for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
    generate_to(shell, &mut cmd, BIN, &completions_dir)
      .with_context(|| format!("Failed to generate {shell} completions"))?;
  }
  println!(
    "Shell completions generated in {}",
    completions_dir.display()
  );
  Ok(())
}

fn generate_manpage(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)?;
  let file_path = man_dir.join(format!("{BIN}.1"));
  let mut file = fs::File::create(&file_path).with_context(|| {
    format!("Failed to create manpage file at {}", file_path.display())
  })?;
  Man::new(Cli::command())
    .render(&mut file)
    .context("Failed to render manpage")?;
  println!("Manpage generated in {}", man_dir.display());
  Ok(())
}

fn write_role_list(output: &Path) -> Result<()> {
  let mut text = String::from("# Roles\n\nPass one of these to `reportlint check --role`.\n\n");
  for role in Role::ALL {
    writeln!(text, "- `{role}`")?;
  }
  if let Some(parent) = output.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(output, text)
    .with_context(|| format!("Failed to write {}", output.display()))?;
  println!("Role list written to {}", output.display());
  Ok(())
}
