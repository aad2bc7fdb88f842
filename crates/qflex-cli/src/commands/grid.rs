//! Grid command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use super::common::{OutputFormat, load_grid, print_json};

/// Execute the grid command.
pub fn execute(path: &Path, format: OutputFormat) -> Result<()> {
    let grid = load_grid(path)?;

    if format == OutputFormat::Json {
        return print_json(&grid);
    }

    println!(
        "{} Grid {}: {} x {}, {} qubits",
        style("→").cyan().bold(),
        style(path.display()).green(),
        grid.num_rows(),
        grid.num_cols(),
        style(grid.len()).yellow()
    );
    for (index, qubit) in grid.iter() {
        println!("  {index:>5}  {qubit}");
    }
    Ok(())
}
