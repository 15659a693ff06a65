use clap::Parser;
use log::{error, info, warn, LevelFilter};
use mermaid_creator::{create_diagram_from_json, ConfigOverrides, DiagramError};
use std::io::{self, Read};
use std::path::PathBuf;
use std::{fs, process, str::FromStr};

/// Generate a Mermaid definition from a JSON diagram description.
///
/// Reads the request from INPUT, or from stdin when INPUT is omitted or `-`.
#[derive(Parser, Debug)]
#[command(name = "mermaid-creator", author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON request
    input: Option<PathBuf>,

    /// Path to a JSON file with renderer configuration overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full diagram result as JSON instead of only the definition
    #[arg(long)]
    json: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid configuration overrides: {0}")]
    Config(serde_json::Error),
    #[error(transparent)]
    Diagram(#[from] DiagramError),
    #[error("failed to serialize result: {0}")]
    Output(serde_json::Error),
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Read {
                    path: "stdin".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let input = read_input(cli.input.as_ref())?;

    let overrides = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.display().to_string(),
                source,
            })?;
            ConfigOverrides::from_json(&text).map_err(CliError::Config)?
        }
        None => ConfigOverrides::default(),
    };

    let diagram = create_diagram_from_json(&input, &overrides)?;
    if !diagram.warnings.is_empty() {
        warn!(count = diagram.warnings.len(); "Some content was skipped");
    }

    if cli.json {
        serde_json::to_string_pretty(&diagram).map_err(CliError::Output)
    } else {
        Ok(diagram.definition)
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!("Parsed arguments: {:?}", cli);

    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            error!(err:err; "Diagram creation failed");
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
