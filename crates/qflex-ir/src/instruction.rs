//! Gate applications bound to lattice qubits.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::qubit::GridQubit;

/// A gate applied to concrete lattice qubits.
///
/// Operand order is significant: for controlled gates the first qubit is the
/// control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The applied gate.
    pub gate: Gate,
    /// Qubits this instruction operates on, in operand order.
    pub qubits: Vec<GridQubit>,
    /// Timestep label carried over from the source text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestep: Option<i64>,
}

impl Instruction {
    /// Create a gate instruction.
    ///
    /// Returns an error if the operand count does not match the gate arity
    /// or a qubit appears twice.
    pub fn new(
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = GridQubit>,
    ) -> IrResult<Self> {
        let gate = gate.into();
        let qubits: Vec<GridQubit> = qubits.into_iter().collect();

        let got = u32::try_from(qubits.len()).unwrap_or(u32::MAX);
        if got != gate.num_qubits() {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate.name().to_string(),
                expected: gate.num_qubits(),
                got,
            });
        }

        for (i, q) in qubits.iter().enumerate() {
            if qubits[..i].contains(q) {
                return Err(IrError::DuplicateQubit {
                    qubit: *q,
                    gate_name: gate.name().to_string(),
                });
            }
        }

        Ok(Self {
            gate,
            qubits,
            timestep: None,
        })
    }

    /// Attach a timestep label.
    #[must_use]
    pub fn with_timestep(mut self, timestep: i64) -> Self {
        self.timestep = Some(timestep);
        self
    }

    /// Get the name of the gate.
    pub fn name(&self) -> &str {
        self.gate.name()
    }

    /// Number of qubits the instruction acts on.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }
}
