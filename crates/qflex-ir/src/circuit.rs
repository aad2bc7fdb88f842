//! Ordered gate sequences.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::IrResult;
use crate::gate::{Gate, StandardGate};
use crate::instruction::Instruction;
use crate::qubit::GridQubit;

/// A quantum circuit: an ordered sequence of gate applications.
///
/// Instructions keep the order in which they were appended. Nothing in this
/// type reorders them, timestep labels included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Instructions in insertion order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: vec![],
        }
    }

    /// Append an instruction.
    pub fn push(&mut self, instruction: Instruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: GridQubit) -> IrResult<&mut Self> {
        self.gate(StandardGate::H, [qubit])
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: GridQubit) -> IrResult<&mut Self> {
        self.gate(StandardGate::X, [qubit])
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: GridQubit) -> IrResult<&mut Self> {
        self.gate(StandardGate::Z, [qubit])
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: GridQubit) -> IrResult<&mut Self> {
        self.gate(StandardGate::T, [qubit])
    }

    /// Apply `X^0.5`.
    pub fn sqrt_x(&mut self, qubit: GridQubit) -> IrResult<&mut Self> {
        self.gate(StandardGate::SqrtX, [qubit])
    }

    /// Apply `Y^0.5`.
    pub fn sqrt_y(&mut self, qubit: GridQubit) -> IrResult<&mut Self> {
        self.gate(StandardGate::SqrtY, [qubit])
    }

    /// Apply `H^0.5`.
    pub fn sqrt_h(&mut self, qubit: GridQubit) -> IrResult<&mut Self> {
        self.gate(StandardGate::SqrtH, [qubit])
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: GridQubit) -> IrResult<&mut Self> {
        self.gate(StandardGate::Rz(theta), [qubit])
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: GridQubit, target: GridQubit) -> IrResult<&mut Self> {
        self.gate(StandardGate::CX, [control, target])
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, q1: GridQubit, q2: GridQubit) -> IrResult<&mut Self> {
        self.gate(StandardGate::CZ, [q1, q2])
    }

    /// Apply any gate.
    pub fn gate(
        &mut self,
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = GridQubit>,
    ) -> IrResult<&mut Self> {
        self.instructions.push(Instruction::new(gate, qubits)?);
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instructions in insertion order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Iterate over instructions in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// All qubits touched by the circuit, in row-major order.
    pub fn qubits(&self) -> BTreeSet<GridQubit> {
        self.instructions
            .iter()
            .flat_map(|inst| inst.qubits.iter().copied())
            .collect()
    }

    /// Number of distinct qubits touched by the circuit.
    pub fn num_qubits(&self) -> usize {
        self.qubits().len()
    }

    /// Number of layers when each instruction is placed in the earliest
    /// layer after every previous instruction on its qubits.
    pub fn depth(&self) -> usize {
        let mut frontier: BTreeMap<GridQubit, usize> = BTreeMap::new();
        let mut depth = 0;
        for inst in &self.instructions {
            let layer = inst
                .qubits
                .iter()
                .filter_map(|q| frontier.get(q))
                .max()
                .copied()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                frontier.insert(*q, layer);
            }
            depth = depth.max(layer);
        }
        depth
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
