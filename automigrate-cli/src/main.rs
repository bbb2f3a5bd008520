mod artifact;
mod config;

use anyhow::Context;
use automigrate_doctor::load_installation_metadata_file;
use automigrate_render::style::{AnsiStyler, PlainStyler};
use automigrate_render::summary::{migration_summary, MigrationSummaryInput};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "automigrate",
    version,
    about = "Render human-readable summaries of automated migration runs."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the summary of a completed migration run.
    Summary(SummaryArgs),
}

#[derive(Debug, Parser)]
struct SummaryArgs {
    /// Project root (default: current directory).
    #[arg(long, default_value = ".")]
    project_root: Utf8PathBuf,

    /// Run artifact to summarize (default: <project_root>/migration-run.json).
    #[arg(long)]
    run_file: Option<Utf8PathBuf>,

    /// Installation metadata snapshot. If omitted, the doctor falls back to
    /// <project_root>/installations.json when present.
    #[arg(long)]
    installations: Option<Utf8PathBuf>,

    /// Log file path shown in the summary, overriding the run artifact.
    #[arg(long)]
    log_file: Option<String>,

    /// Disable ANSI colors and box border styling.
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Summary(args) => cmd_summary(args),
    }
}

fn cmd_summary(args: SummaryArgs) -> anyhow::Result<()> {
    let project_root = args.project_root;
    let run_file = args
        .run_file
        .unwrap_or_else(|| project_root.join("migration-run.json"));

    let run = artifact::load_run(&run_file)
        .with_context(|| format!("load migration run from {}", run_file))?;

    let file_config = config::load_or_default(&project_root).context("load automigrate.toml")?;

    let installation_metadata = match &args.installations {
        Some(path) => Some(
            load_installation_metadata_file(path)
                .with_context(|| format!("load installation metadata from {}", path))?,
        ),
        None => None,
    };

    // CLI flag wins over config, config over the run artifact.
    let log_file = args
        .log_file
        .or(file_config.output.log_file)
        .unwrap_or_else(|| run.log_file.clone());

    let input = MigrationSummaryInput {
        fix_results: &run.fix_results,
        fix_summary: &run.fix_summary,
        log_file: &log_file,
        installation_metadata: installation_metadata.as_ref(),
        project_root: &project_root,
    };

    let use_color = file_config.output.color && !args.no_color;
    debug!(color = use_color, run_file = %run_file, "rendering summary");

    let rendered = if use_color {
        migration_summary(&input, &AnsiStyler)?
    } else {
        migration_summary(&input, &PlainStyler)?
    };

    println!("{rendered}");
    info!(migrations = run.fix_results.len(), "summary rendered");
    Ok(())
}
