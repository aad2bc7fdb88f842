//! Error types for the analysis crate.

use thiserror::Error;

/// Errors produced by circuit diagnostics.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Schmidt rank requested for a gate on three or more qubits.
    #[error("Schmidt rank is not implemented for gate '{gate}' on {num_qubits} qubits")]
    UnsupportedArity {
        /// Name of the offending gate.
        gate: String,
        /// Number of qubits it acts on.
        num_qubits: u32,
    },

    /// Tolerance is negative or not a finite number.
    #[error("tolerance must be a finite non-negative number, got {0}")]
    InvalidTolerance(f64),

    /// The gate could not provide its unitary.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qflex_ir::IrError),
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
