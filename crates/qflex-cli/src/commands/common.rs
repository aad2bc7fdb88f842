//! Shared helpers for CLI commands.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use qflex_ir::Circuit;
use qflex_parse::{CircuitBuilder, QubitIndexMap, read_grid};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Table,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Map a validated config value to a format.
    pub fn from_config(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    let file =
        File::open(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Load a grid layout file.
pub fn load_grid(path: &Path) -> Result<QubitIndexMap> {
    debug!("Loading grid from {}", path.display());
    read_grid(open(path)?).with_context(|| format!("Invalid grid file {}", path.display()))
}

/// Load a grid layout and a circuit file that addresses it.
pub fn load_circuit(grid_path: &Path, circuit_path: &Path) -> Result<(QubitIndexMap, Circuit)> {
    let grid = load_grid(grid_path)?;
    let name = circuit_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("circuit");
    debug!("Loading circuit '{}' from {}", name, circuit_path.display());
    let circuit = CircuitBuilder::new(&grid)
        .with_name(name)
        .read(open(circuit_path)?)
        .with_context(|| format!("Invalid circuit file {}", circuit_path.display()))?;
    Ok((grid, circuit))
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
