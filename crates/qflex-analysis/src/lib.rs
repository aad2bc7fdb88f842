//! Entanglement Diagnostics for QFlex Circuits
//!
//! The Schmidt rank of a two-qubit gate counts the product terms needed to
//! write it as `Σ_k A_k ⊗ B_k`. Rank 1 means the gate splits into independent
//! single-qubit operations; anything higher creates entanglement across the
//! bond it acts on, which is what drives tensor-network contraction cost.
//!
//! # Example
//!
//! ```rust
//! use qflex_analysis::{EntanglementReport, SchmidtRankAnalyzer, schmidt_rank};
//! use qflex_ir::{Circuit, Gate, GridQubit, StandardGate};
//!
//! assert_eq!(schmidt_rank(&StandardGate::CZ.into()).unwrap(), 2);
//!
//! let product = Gate::tensor(&StandardGate::H.into(), &StandardGate::T.into()).unwrap();
//! assert_eq!(schmidt_rank(&product).unwrap(), 1);
//!
//! let (a, b) = (GridQubit::new(0, 0), GridQubit::new(1, 0));
//! let mut circuit = Circuit::new("bond");
//! circuit.h(a).unwrap().cx(a, b).unwrap();
//!
//! let report = EntanglementReport::from_circuit(&circuit, &SchmidtRankAnalyzer::new()).unwrap();
//! assert_eq!(report.entangling, 1);
//! ```

mod error;
mod report;
mod schmidt;

pub use error::{AnalysisError, AnalysisResult};
pub use report::{EntanglementReport, RankEntry};
pub use schmidt::{DEFAULT_TOLERANCE, SchmidtRankAnalyzer, schmidt_rank};
