//! Per-circuit entanglement summary.

use std::collections::BTreeMap;

use qflex_ir::{Circuit, GridQubit};
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::AnalysisResult;
use crate::schmidt::SchmidtRankAnalyzer;

/// Schmidt rank of one instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    /// Position in the circuit.
    pub index: usize,
    /// Timestep label, if the instruction had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestep: Option<i64>,
    /// Gate name.
    pub gate: String,
    /// Operand sites, in written order.
    pub qubits: Vec<GridQubit>,
    /// Schmidt rank of the gate.
    pub rank: usize,
}

/// Schmidt ranks for every instruction of a circuit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntanglementReport {
    /// Circuit name.
    pub circuit: String,
    /// One entry per instruction, in circuit order.
    pub entries: Vec<RankEntry>,
    /// Number of instructions with rank above 1.
    pub entangling: usize,
    /// Instruction count per rank.
    pub histogram: BTreeMap<usize, usize>,
}

impl EntanglementReport {
    /// Rank every instruction of `circuit`.
    ///
    /// Fails on the first instruction the analyzer cannot handle.
    #[instrument(skip_all, fields(circuit = circuit.name()))]
    pub fn from_circuit(
        circuit: &Circuit,
        analyzer: &SchmidtRankAnalyzer,
    ) -> AnalysisResult<Self> {
        let mut entries = Vec::with_capacity(circuit.len());
        let mut histogram = BTreeMap::new();

        for (index, instruction) in circuit.iter().enumerate() {
            let rank = analyzer.rank_instruction(instruction)?;
            *histogram.entry(rank).or_insert(0) += 1;
            entries.push(RankEntry {
                index,
                timestep: instruction.timestep,
                gate: instruction.name().to_string(),
                qubits: instruction.qubits.clone(),
                rank,
            });
        }

        let entangling = entries.iter().filter(|e| e.rank > 1).count();
        info!(
            "{} of {} instructions are entangling",
            entangling,
            entries.len()
        );

        Ok(Self {
            circuit: circuit.name().to_string(),
            entries,
            entangling,
            histogram,
        })
    }

    /// Number of ranked instructions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the circuit had no instructions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest rank seen, `None` for an empty circuit.
    pub fn max_rank(&self) -> Option<usize> {
        self.histogram.keys().next_back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qflex_ir::CustomGate;

    #[test]
    fn test_report_counts() {
        let (a, b, c) = (
            GridQubit::new(0, 0),
            GridQubit::new(0, 1),
            GridQubit::new(1, 1),
        );
        let mut circuit = Circuit::new("mix");
        circuit.h(a).unwrap().cz(a, b).unwrap().t(c).unwrap().cx(b, c).unwrap();

        let report = EntanglementReport::from_circuit(&circuit, &SchmidtRankAnalyzer::new()).unwrap();
        assert_eq!(report.len(), 4);
        assert_eq!(report.entangling, 2);
        assert_eq!(report.histogram, BTreeMap::from([(1, 2), (2, 2)]));
        assert_eq!(report.max_rank(), Some(2));
        let ranks: Vec<_> = report.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_empty_circuit() {
        let report =
            EntanglementReport::from_circuit(&Circuit::new("empty"), &SchmidtRankAnalyzer::new())
                .unwrap();
        assert!(report.is_empty());
        assert_eq!(report.max_rank(), None);
    }

    #[test]
    fn test_first_failure_aborts() {
        let qubits = [
            GridQubit::new(0, 0),
            GridQubit::new(0, 1),
            GridQubit::new(0, 2),
        ];
        let mut circuit = Circuit::new("wide");
        circuit.gate(CustomGate::new("ccz", 3), qubits).unwrap();
        assert!(EntanglementReport::from_circuit(&circuit, &SchmidtRankAnalyzer::new()).is_err());
    }
}
