//! Circuit assembly from instruction lines.

use std::io::BufRead;

use qflex_ir::{Circuit, GridQubit, Instruction};
use tracing::{debug, info, instrument};

use crate::error::{ParseError, ParseResult};
use crate::grid::QubitIndexMap;
use crate::line::{GateSpec, parse_sanitized};
use crate::sanitize::sanitize;

/// Builds a [`Circuit`] from circuit text against a qubit layout.
///
/// Instructions are appended in the order their lines appear. Timestep
/// labels are kept on each instruction but never used for ordering.
pub struct CircuitBuilder<'a> {
    qubits: &'a QubitIndexMap,
    name: String,
}

impl<'a> CircuitBuilder<'a> {
    /// Create a builder resolving qubit indices through `qubits`.
    pub fn new(qubits: &'a QubitIndexMap) -> Self {
        Self {
            qubits,
            name: "circuit".into(),
        }
    }

    /// Set the name of the produced circuit.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Consume a line stream and build the circuit.
    ///
    /// Blank lines, comments and lines with fewer than two tokens are
    /// skipped. Any other malformed line aborts the whole parse with an
    /// error carrying the line number and raw text.
    #[instrument(skip(self, reader), fields(circuit = %self.name))]
    pub fn read<R: BufRead>(self, reader: R) -> ParseResult<Circuit> {
        let mut circuit = Circuit::new(self.name.clone());

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| ParseError::from(e).at_line(line_no, ""))?;
            let clean = sanitize(&line);
            if clean.split_whitespace().nth(1).is_none() {
                continue;
            }

            let instruction = parse_sanitized(&clean)
                .and_then(|spec| self.resolve(&spec))
                .map_err(|e| e.at_line(line_no, line.trim_end()))?;
            debug!(
                "line {}: {} on {:?}",
                line_no,
                instruction.name(),
                instruction.qubits
            );
            circuit.push(instruction);
        }

        info!(
            "Parsed circuit '{}' with {} instructions on {} qubits",
            circuit.name(),
            circuit.len(),
            circuit.num_qubits()
        );
        Ok(circuit)
    }

    /// Turn a parsed line into an instruction on lattice qubits.
    pub fn resolve(&self, spec: &GateSpec) -> ParseResult<Instruction> {
        let qubits = spec
            .target_indices
            .iter()
            .map(|&index| self.qubits.resolve(index))
            .collect::<ParseResult<Vec<GridQubit>>>()?;

        if let [a, b] = qubits.as_slice() {
            if !a.is_adjacent(b) {
                debug!("{} acts on non-adjacent sites {} and {}", spec.name(), a, b);
            }
        }

        let gate = spec.gate.build(spec.params.as_deref())?;
        let instruction = Instruction::new(gate, qubits)
            .map_err(ParseError::from)?
            .with_timestep(spec.timestep);
        Ok(instruction)
    }
}

/// Read a circuit from a buffered stream.
pub fn read_circuit<R: BufRead>(reader: R, qubits: &QubitIndexMap) -> ParseResult<Circuit> {
    CircuitBuilder::new(qubits).read(reader)
}

/// Parse a circuit from a string.
pub fn parse_circuit(source: &str, qubits: &QubitIndexMap) -> ParseResult<Circuit> {
    read_circuit(source.as_bytes(), qubits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::parse_grid;
    use qflex_ir::{Gate, StandardGate};

    fn layout() -> QubitIndexMap {
        // indices 0, 1, 2, 4, 5 occupied; 3 is a hole
        parse_grid("111\n011\n").unwrap()
    }

    #[test]
    fn test_builds_in_textual_order() {
        let map = layout();
        let circuit = parse_circuit("5 h 0\n0 cz 0 1\n2 t 4\n", &map).unwrap();
        let names: Vec<_> = circuit.iter().map(Instruction::name).collect();
        assert_eq!(names, vec!["h", "cz", "t"]);
        let timesteps: Vec<_> = circuit.iter().map(|i| i.timestep).collect();
        assert_eq!(timesteps, vec![Some(5), Some(0), Some(2)]);
    }

    #[test]
    fn test_qubits_resolved_through_layout() {
        let map = layout();
        let circuit = parse_circuit("0 cx 5 1", &map).unwrap();
        assert_eq!(
            circuit.instructions()[0].qubits,
            vec![GridQubit::new(1, 2), GridQubit::new(0, 1)]
        );
    }

    #[test]
    fn test_headers_and_comments_skipped() {
        let map = layout();
        let source = "5\n# comment line with tokens\n\n   \n0 rz(0.25) 2 # trailing\n";
        let circuit = parse_circuit(source, &map).unwrap();
        assert_eq!(circuit.len(), 1);
        assert_eq!(
            circuit.instructions()[0].gate,
            Gate::standard(StandardGate::Rz(0.25))
        );
    }

    #[test]
    fn test_unknown_qubit() {
        let map = layout();
        let err = parse_circuit("0 h 0\n1 h 3\n", &map).unwrap_err();
        assert!(matches!(err, ParseError::Line { line: 2, .. }));
        assert!(matches!(err.root(), ParseError::UnknownQubit { index: 3 }));
    }

    #[test]
    fn test_malformed_line_aborts_parse() {
        let map = layout();
        let err = parse_circuit("0 h 0\n1 foo 1\n2 h 2\n", &map).unwrap_err();
        match err {
            ParseError::Line { line, text, source } => {
                assert_eq!(line, 2);
                assert_eq!(text, "1 foo 1");
                assert!(matches!(*source, ParseError::UnsupportedGate { .. }));
            }
            other => panic!("expected line error, got {other:?}"),
        }
    }

    #[test]
    fn test_arity_checked() {
        let map = layout();
        let err = parse_circuit("0 cz 0", &map).unwrap_err();
        assert!(matches!(err.root(), ParseError::Circuit(_)));
        let err = parse_circuit("0 h 0 1", &map).unwrap_err();
        assert!(matches!(err.root(), ParseError::Circuit(_)));
    }

    #[test]
    fn test_read_failure_carries_line_number() {
        let map = layout();
        let bytes: &[u8] = b"0 h 0\n1 h \xff\n";
        let err = read_circuit(bytes, &map).unwrap_err();
        assert!(matches!(err, ParseError::Line { line: 2, .. }));
        assert!(matches!(err.root(), ParseError::Io(_)));
    }

    #[test]
    fn test_circuit_name() {
        let map = layout();
        let circuit = CircuitBuilder::new(&map)
            .with_name("rqc")
            .read("0 h 0".as_bytes())
            .unwrap();
        assert_eq!(circuit.name(), "rqc");
    }
}
