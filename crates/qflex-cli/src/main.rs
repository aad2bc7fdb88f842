//! QFlex Command-Line Interface
//!
//! Reads a qubit grid layout and a circuit file, reports the parsed circuit
//! and the Schmidt rank of every gate.
//!
//! ```text
//! qflex grid    -g grid.txt
//! qflex parse   -g grid.txt -c circuit.txt [--format json]
//! qflex schmidt -g grid.txt -c circuit.txt [--tolerance 1e-8]
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::common::OutputFormat;
use commands::{grid, parse, schmidt, version};
use config::Config;

/// QFlex - lattice circuit reader and entanglement diagnostics
#[derive(Parser)]
#[command(name = "qflex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ~/.qflex/config.yaml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the qubit index map of a grid file
    Grid {
        /// Grid layout file
        #[arg(short, long)]
        grid: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Parse a circuit against a grid and print it in file order
    Parse {
        /// Grid layout file
        #[arg(short, long)]
        grid: PathBuf,

        /// Circuit file
        #[arg(short, long)]
        circuit: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Compute the Schmidt rank of every gate in a circuit
    Schmidt {
        /// Grid layout file
        #[arg(short, long)]
        grid: PathBuf,

        /// Circuit file
        #[arg(short, long)]
        circuit: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Relative singular-value threshold
        #[arg(short, long)]
        tolerance: Option<f64>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    // Setup logging
    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!(
        "Config: format={}, tolerance={:e}, log level={}",
        config.output.format, config.analysis.tolerance, config.logging.level
    );

    // Execute command
    let result = match cli.command {
        Commands::Grid { grid: path, format } => {
            grid::execute(&path, resolve_format(format, &config))
        }

        Commands::Parse {
            grid: grid_path,
            circuit,
            format,
        } => parse::execute(&grid_path, &circuit, resolve_format(format, &config)),

        Commands::Schmidt {
            grid: grid_path,
            circuit,
            format,
            tolerance,
        } => schmidt::execute(
            &grid_path,
            &circuit,
            resolve_format(format, &config),
            tolerance.unwrap_or(config.analysis.tolerance),
        ),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Command-line format, falling back to the configured one.
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| OutputFormat::from_config(&config.output.format))
}
