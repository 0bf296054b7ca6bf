//! # dcr - Demand/Capacity CLI
//!
//! Thin shell over `dcr_core`: parses arguments or a JSON request, runs the
//! analysis, prints a report or the JSON result and, when asked, resamples
//! the normalized field onto a uniform grid of cell centres.
//!
//! Engine errors are caught here, printed to stderr (message and JSON) and
//! turned into a non-zero exit status.

mod commands;
mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::{CommandLine, Commands};
use dcr_core::equations::registry::{generate_equations_markdown, ALL_EQUATIONS};
use dcr_core::mapper::uniform_cell_centres;
use dcr_core::{map_field, run, AnalysisRequest, AnalysisResult, CalcError, EngineSettings};

#[derive(Debug, Error)]
enum CliError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Calc(#[from] CalcError),
}

type CliResult<T> = Result<T, CliError>;

/// Field resampled onto the visualization grid
#[derive(Serialize)]
struct MappedField {
    positions: Vec<f64>,
    values: Vec<f64>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    result: &'a AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    mapped_field: Option<MappedField>,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_file(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_settings(path: Option<&Path>) -> CliResult<EngineSettings> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading settings");
            Ok(EngineSettings::from_json(&read_file(path)?)?)
        }
        None => Ok(EngineSettings::default()),
    }
}

fn map_display_field(request: &AnalysisRequest, result: &AnalysisResult, cells: usize) -> CliResult<MappedField> {
    let positions = uniform_cell_centres(request.extent_m(), cells)?;
    let field = result.display_field()?;
    let values = map_field(&field, &positions)?;
    debug!(cells, "mapped display field");
    Ok(MappedField { positions, values })
}

fn print_equations(json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ALL_EQUATIONS).map_err(CalcError::from)?);
    } else {
        print!("{}", generate_equations_markdown());
    }
    Ok(())
}

fn execute(cli: &CommandLine) -> CliResult<()> {
    let request = match &cli.command {
        Commands::Equations => return print_equations(cli.json),
        Commands::Run { file } => AnalysisRequest::from_json(&read_file(file)?)?,
        inline => match inline.to_request() {
            Some(request) => request,
            None => return Ok(()),
        },
    };
    let settings = load_settings(cli.settings.as_deref())?;

    let result = run(&request, &settings)?;
    let mapped = cli
        .targets
        .map(|cells| map_display_field(&request, &result, cells))
        .transpose()?;

    if cli.json {
        let output = JsonOutput {
            result: &result,
            mapped_field: mapped,
        };
        println!("{}", serde_json::to_string_pretty(&output).map_err(CalcError::from)?);
    } else {
        report::print_result(&result);
        if let Some(field) = mapped {
            report::print_mapped_field(&field.positions, &field.values);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = CommandLine::parse_args();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let CliError::Calc(calc) = &e {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}
