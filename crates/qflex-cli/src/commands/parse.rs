//! Parse command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use qflex_ir::Instruction;

use super::common::{OutputFormat, load_circuit, print_json};

/// Execute the parse command.
pub fn execute(grid_path: &Path, circuit_path: &Path, format: OutputFormat) -> Result<()> {
    let (_, circuit) = load_circuit(grid_path, circuit_path)?;

    if format == OutputFormat::Json {
        return print_json(&circuit);
    }

    println!(
        "{} Circuit {}: {} instructions on {} qubits, depth {}",
        style("→").cyan().bold(),
        style(circuit.name()).green(),
        circuit.len(),
        circuit.num_qubits(),
        circuit.depth()
    );
    for (i, instruction) in circuit.iter().enumerate() {
        println!("  {i:>5}  {}", describe(instruction));
    }
    Ok(())
}

/// One-line rendering `t=<step> <gate>[(params)] <sites>`.
pub fn describe(instruction: &Instruction) -> String {
    let timestep = instruction
        .timestep
        .map_or_else(|| "-".to_string(), |t| t.to_string());
    let params = instruction.gate.parameters();
    let params = if params.is_empty() {
        String::new()
    } else {
        let list: Vec<_> = params.iter().map(ToString::to_string).collect();
        format!("({})", list.join(", "))
    };
    let qubits: Vec<_> = instruction.qubits.iter().map(ToString::to_string).collect();
    format!(
        "t={timestep:<4} {}{params} {}",
        instruction.name(),
        qubits.join(" ")
    )
}
