//! Operator Schmidt rank of one- and two-qubit gates.
//!
//! A two-qubit unitary `U` acting on `|q0 q1⟩` is regrouped so that rows index
//! the (output, input) legs of `q0` and columns those of `q1`:
//!
//! ```text
//! M[(a, c), (b, d)] = U[(a, b), (c, d)]
//! ```
//!
//! The number of non-zero singular values of `M` is the Schmidt rank of `U`
//! across the `q0 | q1` cut. A product `A ⊗ B` has rank 1, `CZ` and `CX`
//! have rank 2, and the maximum is 4.

use nalgebra::Matrix4;
use num_complex::Complex64;
use qflex_ir::{Gate, Instruction, IrError};
use tracing::trace;

use crate::error::{AnalysisError, AnalysisResult};

/// Default relative threshold below which a singular value counts as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Computes Schmidt ranks of gates across their qubit bipartition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchmidtRankAnalyzer {
    tolerance: f64,
}

impl SchmidtRankAnalyzer {
    /// Create an analyzer with the default tolerance.
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Set the relative tolerance.
    ///
    /// A singular value `σ` is non-zero when `σ > tolerance · max(1, σ_max)`.
    /// `0.0` gives an exact comparison. Negative or non-finite values fail
    /// with [`AnalysisError::InvalidTolerance`].
    pub fn with_tolerance(mut self, tolerance: f64) -> AnalysisResult<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(AnalysisError::InvalidTolerance(tolerance));
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    /// The relative tolerance in use.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Schmidt rank of a gate.
    ///
    /// Single-qubit gates are rank 1 without computing anything. Gates on
    /// three or more qubits fail with [`AnalysisError::UnsupportedArity`].
    pub fn rank(&self, gate: &Gate) -> AnalysisResult<usize> {
        match gate.num_qubits() {
            0 | 1 => Ok(1),
            2 => {
                let matrix = gate.matrix()?;
                let rank = self.rank_of_matrix(gate.name(), &matrix)?;
                trace!("{} has Schmidt rank {}", gate.name(), rank);
                Ok(rank)
            }
            n => Err(AnalysisError::UnsupportedArity {
                gate: gate.name().to_string(),
                num_qubits: n,
            }),
        }
    }

    /// Schmidt rank of the gate applied by an instruction.
    pub fn rank_instruction(&self, instruction: &Instruction) -> AnalysisResult<usize> {
        self.rank(&instruction.gate)
    }

    /// Singular values of the regrouped operator, in descending order.
    pub fn singular_values(matrix: &[Complex64]) -> Option<[f64; 4]> {
        if matrix.len() != 16 {
            return None;
        }
        let regrouped = Matrix4::<Complex64>::from_fn(|row, col| {
            let (a, c) = (row / 2, row % 2);
            let (b, d) = (col / 2, col % 2);
            matrix[(a * 2 + b) * 4 + (c * 2 + d)]
        });
        let sv = regrouped.singular_values();
        let mut values = [sv[0], sv[1], sv[2], sv[3]];
        values.sort_by(|x, y| y.total_cmp(x));
        Some(values)
    }

    fn rank_of_matrix(&self, name: &str, matrix: &[Complex64]) -> AnalysisResult<usize> {
        let values = Self::singular_values(matrix).ok_or_else(|| IrError::MatrixDimension {
            gate_name: name.to_string(),
            expected: 16,
            got: matrix.len(),
        })?;
        let threshold = self.tolerance * values[0].max(1.0);
        Ok(values.iter().filter(|&&s| s > threshold).count())
    }
}

impl Default for SchmidtRankAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Schmidt rank of a gate with the default tolerance.
pub fn schmidt_rank(gate: &Gate) -> AnalysisResult<usize> {
    SchmidtRankAnalyzer::new().rank(gate)
}
