use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use remsum::report::Reporter;
use remsum::{ConsolidateError, Result, consolidate};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Consolidate(args) => execute_consolidate(args),
    }
}

fn execute_consolidate(args: ConsolidateArgs) -> Result<()> {
    if !args.template.exists() {
        return Err(ConsolidateError::MissingInput(args.template));
    }
    if let Some(missing) = args.data.iter().find(|path| !path.exists()) {
        return Err(ConsolidateError::MissingInput(missing.clone()));
    }

    let mut reporter = ConsoleReporter;
    let report =
        consolidate::consolidate_files(&args.template, &args.data, &args.output, &mut reporter)?;

    if let Some(path) = &args.report {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!(report = %path.display(), "consolidation report written");
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ConsolidateError::Logging(error.to_string()))
}

/// Reporter that surfaces progress and warnings on the terminal.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn progress(&mut self, fraction: f64, label: &str) {
        info!(percent = (fraction * 100.0).round() as u32, "{label}");
    }

    fn warning(&mut self, message: &str) {
        warn!("{message}");
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sum numeric cells across workbooks into a template-shaped output."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Consolidate data workbooks into a copy of the template.
    Consolidate(ConsolidateArgs),
}

#[derive(clap::Args)]
struct ConsolidateArgs {
    /// Template workbook defining the structure and formatting of the output.
    #[arg(long)]
    template: PathBuf,

    /// Data workbooks whose numeric cells are summed.
    #[arg(required = true)]
    data: Vec<PathBuf>,

    /// Path for the consolidated output workbook.
    #[arg(long)]
    output: PathBuf,

    /// Optional path for a JSON report of orphaned sheets and skipped cells.
    #[arg(long)]
    report: Option<PathBuf>,
}
