//! QFlex Circuit Intermediate Representation
//!
//! Core data structures for circuits laid out on a 2-D qubit lattice. This is
//! the representation produced by the `qflex-parse` front-end and consumed by
//! the diagnostics in `qflex-analysis`.
//!
//! # Core Components
//!
//! - **Lattice qubits**: [`GridQubit`] addresses a `(row, col)` site
//! - **Gates**: [`StandardGate`] for the supported gate set and [`CustomGate`]
//!   for arbitrary operators given by their unitary
//! - **Unitaries**: [`Unitary2x2`], [`Unitary4x4`]
//! - **Instructions**: [`Instruction`] binding a gate to lattice qubits
//! - **Circuit**: [`Circuit`], an ordered instruction sequence
//!
//! # Example
//!
//! ```rust
//! use qflex_ir::{Circuit, GridQubit};
//!
//! let mut circuit = Circuit::new("pair");
//! let (a, b) = (GridQubit::new(0, 0), GridQubit::new(0, 1));
//!
//! circuit.h(a).unwrap();
//! circuit.cz(a, b).unwrap();
//!
//! assert_eq!(circuit.len(), 2);
//! assert_eq!(circuit.num_qubits(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `h` | 1 | Hadamard |
//! | `x`, `z` | 1 | Pauli gates |
//! | `t` | 1 | `Z^0.25` |
//! | `x_1_2`, `y_1_2`, `h_1_2` | 1 | Square roots of X, Y, H |
//! | `rz(θ)` | 1 | Z rotation |
//! | `cz` | 2 | Controlled-Z |
//! | `cx` | 2 | Controlled-NOT |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;
pub mod unitary;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{CustomGate, Gate, GateKind, StandardGate};
pub use instruction::Instruction;
pub use qubit::GridQubit;
pub use unitary::{Unitary2x2, Unitary4x4};
