//! Quantum gate types.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::unitary::{Unitary2x2, Unitary4x4};

/// Standard gates with known semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit gates
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Z gate.
    Z,
    /// T gate (Z raised to the power 0.25).
    T,
    /// X raised to the power 0.5.
    SqrtX,
    /// Y raised to the power 0.5.
    SqrtY,
    /// H raised to the power 0.5.
    SqrtH,
    /// Rotation around the Z axis by an angle in radians.
    Rz(f64),

    // Two-qubit gates
    /// Controlled-Z gate.
    CZ,
    /// Controlled-X (CNOT) gate, first operand is the control.
    CX,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Z => "z",
            StandardGate::T => "t",
            StandardGate::SqrtX => "x_1_2",
            StandardGate::SqrtY => "y_1_2",
            StandardGate::SqrtH => "h_1_2",
            StandardGate::Rz(_) => "rz",
            StandardGate::CZ => "cz",
            StandardGate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H
            | StandardGate::X
            | StandardGate::Z
            | StandardGate::T
            | StandardGate::SqrtX
            | StandardGate::SqrtY
            | StandardGate::SqrtH
            | StandardGate::Rz(_) => 1,

            StandardGate::CZ | StandardGate::CX => 2,
        }
    }

    /// Get parameters of this gate.
    pub fn parameters(&self) -> Vec<f64> {
        match self {
            StandardGate::Rz(theta) => vec![*theta],
            _ => vec![],
        }
    }

    /// Unitary of a single-qubit gate, `None` for two-qubit gates.
    pub fn unitary_1q(&self) -> Option<Unitary2x2> {
        let u = match self {
            StandardGate::H => Unitary2x2::h(),
            StandardGate::X => Unitary2x2::x(),
            StandardGate::Z => Unitary2x2::z(),
            StandardGate::T => Unitary2x2::t(),
            StandardGate::SqrtX => Unitary2x2::sqrt_x(),
            StandardGate::SqrtY => Unitary2x2::sqrt_y(),
            StandardGate::SqrtH => Unitary2x2::sqrt_h(),
            StandardGate::Rz(theta) => Unitary2x2::rz(*theta),
            StandardGate::CZ | StandardGate::CX => return None,
        };
        Some(u)
    }

    /// Unitary of a two-qubit gate, `None` for single-qubit gates.
    pub fn unitary_2q(&self) -> Option<Unitary4x4> {
        match self {
            StandardGate::CZ => Some(Unitary4x4::cz()),
            StandardGate::CX => Some(Unitary4x4::cx()),
            _ => None,
        }
    }

    /// Row-major unitary matrix of dimension `2^n × 2^n`.
    pub fn matrix(&self) -> Vec<Complex64> {
        if let Some(u) = self.unitary_1q() {
            return u.data.to_vec();
        }
        self.unitary_2q()
            .map(|u| u.data.to_vec())
            .unwrap_or_default()
    }
}

/// A quantum gate, either standard or custom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// A standard gate with known semantics.
    Standard(StandardGate),
    /// An operator outside the standard set.
    Custom(CustomGate),
}

/// A user-defined operator, optionally carrying its unitary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomGate {
    /// The name of the gate.
    pub name: String,
    /// The number of qubits it operates on.
    pub num_qubits: u32,
    /// Numeric parameters of the gate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<f64>,
    /// Optional unitary matrix (row-major, 2^n × 2^n).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Complex64>>,
}

impl CustomGate {
    /// Create a new custom gate without a matrix.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            params: vec![],
            matrix: None,
        }
    }

    /// Add parameters to the gate.
    #[must_use]
    pub fn with_params(mut self, params: Vec<f64>) -> Self {
        self.params = params;
        self
    }

    /// Attach a unitary matrix to the gate.
    ///
    /// Returns an error if `matrix.len()` does not equal `(2^num_qubits)^2`,
    /// or if that size does not fit in `usize`.
    pub fn with_matrix(mut self, matrix: Vec<Complex64>) -> IrResult<Self> {
        let Some(len) = 1usize
            .checked_shl(self.num_qubits)
            .and_then(|dim| dim.checked_mul(dim))
        else {
            return Err(IrError::TooManyQubits {
                gate_name: self.name,
                num_qubits: self.num_qubits,
            });
        };
        if matrix.len() != len {
            return Err(IrError::MatrixDimension {
                gate_name: self.name,
                expected: len,
                got: matrix.len(),
            });
        }
        self.matrix = Some(matrix);
        Ok(self)
    }
}

/// A gate with associated metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// Optional label for the gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    /// Create a new gate from a standard gate.
    pub fn standard(gate: StandardGate) -> Self {
        Self {
            kind: GateKind::Standard(gate),
            label: None,
        }
    }

    /// Create a new gate from a custom gate.
    pub fn custom(gate: CustomGate) -> Self {
        Self {
            kind: GateKind::Custom(gate),
            label: None,
        }
    }

    /// Combine two single-qubit gates into one two-qubit operator `a ⊗ b`.
    ///
    /// The result acts on `[q_a, q_b]` exactly as applying `a` to `q_a`
    /// and `b` to `q_b` independently.
    pub fn tensor(a: &Gate, b: &Gate) -> IrResult<Self> {
        for g in [a, b] {
            if g.num_qubits() != 1 {
                return Err(IrError::QubitCountMismatch {
                    gate_name: g.name().to_string(),
                    expected: 1,
                    got: g.num_qubits(),
                });
            }
        }
        let ua = a.unitary_1q()?;
        let ub = b.unitary_1q()?;
        let name = format!("{}⊗{}", a.name(), b.name());
        let custom = CustomGate::new(name, 2).with_matrix(ua.kron(&ub).data.to_vec())?;
        Ok(Gate::custom(custom))
    }

    /// Add a label to the gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        match &self.kind {
            GateKind::Standard(g) => g.name(),
            GateKind::Custom(g) => &g.name,
        }
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match &self.kind {
            GateKind::Standard(g) => g.num_qubits(),
            GateKind::Custom(g) => g.num_qubits,
        }
    }

    /// Get the numeric parameters.
    pub fn parameters(&self) -> Vec<f64> {
        match &self.kind {
            GateKind::Standard(g) => g.parameters(),
            GateKind::Custom(g) => g.params.clone(),
        }
    }

    /// Row-major unitary matrix of this gate.
    pub fn matrix(&self) -> IrResult<Vec<Complex64>> {
        match &self.kind {
            GateKind::Standard(g) => Ok(g.matrix()),
            GateKind::Custom(g) => g.matrix.clone().ok_or_else(|| IrError::MissingMatrix {
                gate_name: g.name.clone(),
            }),
        }
    }

    fn unitary_1q(&self) -> IrResult<Unitary2x2> {
        let m = self.matrix()?;
        let data: [Complex64; 4] = m.try_into().map_err(|m: Vec<Complex64>| {
            IrError::MatrixDimension {
                gate_name: self.name().to_string(),
                expected: 4,
                got: m.len(),
            }
        })?;
        Ok(Unitary2x2 { data })
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::standard(gate)
    }
}

impl From<CustomGate> for Gate {
    fn from(gate: CustomGate) -> Self {
        Gate::custom(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_standard_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::Rz(PI).num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::SqrtY.name(), "y_1_2");

        assert!(StandardGate::H.parameters().is_empty());
        assert_eq!(StandardGate::Rz(0.5).parameters(), vec![0.5]);
    }

    #[test]
    fn test_matrix_sizes() {
        assert_eq!(StandardGate::T.matrix().len(), 4);
        assert_eq!(StandardGate::CZ.matrix().len(), 16);
    }

    #[test]
    fn test_gate_creation() {
        let h = Gate::standard(StandardGate::H);
        assert_eq!(h.name(), "h");
        assert_eq!(h.num_qubits(), 1);
        assert!(h.label.is_none());

        let labeled = Gate::standard(StandardGate::H).with_label("layer0");
        assert_eq!(labeled.label, Some("layer0".to_string()));
    }

    #[test]
    fn test_custom_gate_matrix_dimension_checked() {
        let err = CustomGate::new("bad", 2)
            .with_matrix(vec![Complex64::new(1.0, 0.0); 4])
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::MatrixDimension {
                expected: 16,
                got: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_custom_gate_too_wide_for_matrix() {
        for n in [32, 40, 64, 200] {
            let err = CustomGate::new("wide", n).with_matrix(vec![]).unwrap_err();
            assert!(matches!(err, IrError::TooManyQubits { num_qubits, .. } if num_qubits == n));
        }
    }

    #[test]
    fn test_custom_gate_without_matrix() {
        let g = Gate::custom(CustomGate::new("ccz", 3));
        assert!(matches!(g.matrix(), Err(IrError::MissingMatrix { .. })));
    }

    #[test]
    fn test_tensor_of_single_qubit_gates() {
        let g = Gate::tensor(&StandardGate::H.into(), &StandardGate::T.into()).unwrap();
        assert_eq!(g.num_qubits(), 2);
        assert_eq!(g.name(), "h⊗t");
        let expected = Unitary2x2::h().kron(&Unitary2x2::t());
        assert_eq!(g.matrix().unwrap(), expected.data.to_vec());
    }

    #[test]
    fn test_tensor_rejects_two_qubit_operand() {
        let err = Gate::tensor(&StandardGate::CZ.into(), &StandardGate::H.into()).unwrap_err();
        assert!(matches!(err, IrError::QubitCountMismatch { got: 2, .. }));
    }
}
