//! Error types for the IR crate.

use crate::qubit::GridQubit;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate requires different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: GridQubit,
        /// Gate name for context.
        gate_name: String,
    },

    /// Custom gate has no unitary attached.
    #[error("Gate '{gate_name}' has no unitary matrix")]
    MissingMatrix {
        /// Name of the gate.
        gate_name: String,
    },

    /// Matrix length does not match the gate arity.
    #[error("Matrix for gate '{gate_name}' has {got} elements, expected {expected}")]
    MatrixDimension {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of elements, `(2^n)^2`.
        expected: usize,
        /// Actual number of elements.
        got: usize,
    },

    /// Gate arity too large for its matrix to be addressed.
    #[error("Gate '{gate_name}' on {num_qubits} qubits is too wide for a dense matrix")]
    TooManyQubits {
        /// Name of the gate.
        gate_name: String,
        /// Number of qubits it operates on.
        num_qubits: u32,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
