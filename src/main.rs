use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use riskreg::app::markdown::{MarkdownDashboard, MarkdownLegend};
use riskreg::app::{
    Accumulation, ConfigError, ProjectDashboard, RegisterSourceError, ScoringConfig,
};
use riskreg::domain::scoring::RatingMatrix;
use riskreg::infra::JsonFileRegisterSource;
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Prints the risk status dashboard of a project register.
#[derive(Parser, Debug)]
#[command(name = "riskreg", version, about)]
struct Cli {
    /// Register exported from the REST API as JSON.
    register: PathBuf,

    /// Scoring config; defaults to <config dir>/riskreg/config.json when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides how the weighted score totals its buckets.
    #[arg(long, value_enum)]
    accumulation: Option<Accumulation>,

    /// Also print the probability/impact rating legend.
    #[arg(long)]
    legend: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Register(#[from] RegisterSourceError),
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let mut config = ScoringConfig::resolve(cli.config.as_deref())?;
    if let Some(accumulation) = cli.accumulation {
        config.total_accumulation = accumulation;
    }
    debug!("scoring with configuration: {config:?}");

    let source = JsonFileRegisterSource::new(&cli.register);
    let dashboard = ProjectDashboard::from_source(&source, &config)?;

    let mut output = MarkdownDashboard::from(&dashboard).to_string();
    if cli.legend {
        output.push('\n');
        output.push_str(&MarkdownLegend::from(&RatingMatrix::standard()).to_string());
    }
    Ok(output)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
