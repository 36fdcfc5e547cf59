#![allow(clippy::print_stdout, reason = "Reports go to stdout")]
use std::{fs, process::ExitCode};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};
use reportlint::{
  cli::{Cli, Commands, RunArgs},
  error::ReportlintError,
  utils::{
    self,
    Job,
    output::{self, FileReport},
    snapshots,
  },
};
use reportlint_config::{Config, OutputFormat};
use reportlint_markdown::parse;
use reportlint_roles::Role;

fn main() -> Result<ExitCode> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Commands::Init {
      output,
      format,
      force,
    } => {
      if output.exists() && !force {
        bail!(
          "Configuration file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
      {
        fs::create_dir_all(parent).wrap_err_with(|| {
          format!("Failed to create directory: {}", parent.display())
        })?;
        info!("Created directory: {}", parent.display());
      }

      Config::generate_default_config(format, output).wrap_err_with(|| {
        format!("Failed to generate configuration file: {}", output.display())
      })?;

      info!("Configuration file created successfully.");
      Ok(ExitCode::SUCCESS)
    },

    Commands::Roles => {
      for role in Role::ALL {
        println!("{role}");
      }
      Ok(ExitCode::SUCCESS)
    },

    Commands::Parse { file } => {
      let text = read(file)?;
      println!("{}", serde_json::to_string_pretty(&parse(&text))?);
      Ok(ExitCode::SUCCESS)
    },

    Commands::Detect { role, file } => {
      let text = read(file)?;
      let Some(kind) = role.detect(&text) else {
        bail!("Role '{role}' writes a single kind of document");
      };
      println!("{kind}");
      Ok(ExitCode::SUCCESS)
    },

    Commands::Check { role, paths, run } => {
      let config = load_config(&cli, run)?;
      let files = utils::collect_markdown_files(paths)?;
      if files.is_empty() {
        bail!("No markdown files found");
      }
      let work: Vec<Job> = files.into_iter().map(|path| (path, *role)).collect();
      report(&config, &work)
    },

    Commands::Snapshots { dir, role, run } => {
      let config = load_config(&cli, run)?;
      let dir = dir.as_ref().unwrap_or(&config.snapshot_dir);
      let allowed = config
        .roles
        .iter()
        .map(|name| name.parse::<Role>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(ReportlintError::from)?;

      let stored = snapshots::list_snapshots(dir)?;
      let work = utils::snapshot_jobs(&stored, *role, &allowed);
      if work.is_empty() {
        bail!("No snapshots to validate in {}", dir.display());
      }
      info!("Validating {} snapshot(s) from {}", work.len(), dir.display());
      report(&config, &work)
    },
  }
}

/// Load the configuration and apply the per-run flags on top of it.
fn load_config(cli: &Cli, run: &RunArgs) -> Result<Config> {
  let mut config = Config::load(&cli.config_files, &cli.config_overrides)
    .wrap_err("Failed to load configuration")?;

  if let Some(format) = run.format {
    config.format = format;
  }
  if run.strict {
    config.strict = true;
  }
  if run.jobs.is_some() {
    config.jobs = run.jobs;
  }
  config.validate()?;
  Ok(config)
}

fn report(config: &Config, work: &[Job]) -> Result<ExitCode> {
  let reports: Vec<FileReport> = utils::validate_files(work, config.jobs)?;

  match config.format {
    OutputFormat::Text => print!("{}", output::render_text(&reports, config.strict)),
    OutputFormat::Json => {
      println!("{}", output::render_json(&reports, config.strict)?);
    },
  }

  if reports.iter().all(|r| r.passes(config.strict)) {
    Ok(ExitCode::SUCCESS)
  } else {
    Ok(ExitCode::FAILURE)
  }
}

fn read(path: &std::path::Path) -> Result<String> {
  fs::read_to_string(path)
    .wrap_err_with(|| format!("Failed to read {}", path.display()))
}
