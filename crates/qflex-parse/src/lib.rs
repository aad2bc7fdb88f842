//! Grid and Circuit Readers for QFlex
//!
//! Two plain-text inputs describe a QFlex simulation:
//!
//! - a **grid file**, a 0/1 matrix marking which lattice sites hold a qubit
//! - a **circuit file**, one `<timestep> <gate>[(params)] <qubit>...` line per
//!   gate, where qubits are row-major linear indices into the grid
//!
//! [`read_grid`] turns the first into a [`QubitIndexMap`];
//! [`read_circuit`] uses that map to turn the second into a
//! [`qflex_ir::Circuit`].
//!
//! # Example
//!
//! ```rust
//! use qflex_parse::{parse_circuit, parse_grid};
//!
//! let grid = parse_grid("011\n111\n").unwrap();
//! assert_eq!(grid.len(), 5);
//!
//! let circuit = parse_circuit(
//!     "\
//! 5
//! 0 h 1
//! 0 h 2
//! 1 cz 1 4
//! 2 rz(0.25) 5 # trailing comment
//! ",
//!     &grid,
//! )
//! .unwrap();
//!
//! assert_eq!(circuit.len(), 4);
//! assert_eq!(circuit.instructions()[2].name(), "cz");
//! ```
//!
//! # Gate Vocabulary
//!
//! `h`, `x`, `z`, `t`, `x_1_2`, `y_1_2`, `h_1_2`, `rz(θ)`, `cz`, `cx`.
//! Names are case-sensitive. Anything else is rejected with
//! [`ParseError::UnsupportedGate`].

mod builder;
mod error;
mod grid;
mod line;
pub mod sanitize;
mod vocabulary;

pub use builder::{CircuitBuilder, parse_circuit, read_circuit};
pub use error::{ParseError, ParseResult};
pub use grid::{QubitIndexMap, parse_grid, read_grid};
pub use line::{GateSpec, parse_gate_line};
pub use vocabulary::{Constructor, GateName};
