//! Schmidt command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qflex_analysis::{EntanglementReport, SchmidtRankAnalyzer};

use super::common::{OutputFormat, load_circuit, print_json};
use super::parse::describe;

/// Execute the schmidt command.
pub fn execute(
    grid_path: &Path,
    circuit_path: &Path,
    format: OutputFormat,
    tolerance: f64,
) -> Result<()> {
    let analyzer = SchmidtRankAnalyzer::new().with_tolerance(tolerance)?;
    let (_, circuit) = load_circuit(grid_path, circuit_path)?;

    let report = EntanglementReport::from_circuit(&circuit, &analyzer)
        .context("Schmidt rank analysis failed")?;

    if format == OutputFormat::Json {
        return print_json(&report);
    }

    println!(
        "{} Schmidt ranks for {} (tolerance {:e})",
        style("→").cyan().bold(),
        style(&report.circuit).green(),
        analyzer.tolerance()
    );
    for (entry, instruction) in report.entries.iter().zip(&circuit) {
        let rank = if entry.rank > 1 {
            style(entry.rank).yellow().bold()
        } else {
            style(entry.rank).dim()
        };
        println!("  {:>5}  rank {}  {}", entry.index, rank, describe(instruction));
    }

    println!(
        "\n{} {} of {} gates are entangling",
        style("✓").green().bold(),
        style(report.entangling).yellow(),
        report.len()
    );
    for (rank, count) in &report.histogram {
        println!("  rank {rank}: {count}");
    }
    Ok(())
}
