//! End-to-end tests for reading a grid and a circuit together.

use std::io::{BufReader, Cursor};

use qflex_ir::{Gate, GridQubit, StandardGate};
use qflex_parse::{
    CircuitBuilder, GateName, GateSpec, ParseError, parse_circuit, parse_gate_line, parse_grid,
    read_circuit, read_grid,
};

const GRID: &str = "\
# 4x4 lattice, corners unused
0110
1111
1111
0110
";

const CIRCUIT: &str = "\
12
0 h 1
0 h 2
0 h 4
1 cz 1 2   # horizontal
1 cz 4 8
2 t 1
2 x_1_2 2
2 y_1_2 4
3 rz( 0.785 ) 8
4 cx 5 6
5 h_1_2 13
";

#[test]
fn test_full_pipeline() {
    let grid = read_grid(BufReader::new(Cursor::new(GRID))).unwrap();
    assert_eq!((grid.num_rows(), grid.num_cols()), (4, 4));
    assert_eq!(grid.len(), 12);
    assert!(!grid.contains(0));
    assert!(!grid.contains(15));

    let circuit = read_circuit(BufReader::new(Cursor::new(CIRCUIT)), &grid).unwrap();
    assert_eq!(circuit.len(), 11);

    let names: Vec<_> = circuit.iter().map(|i| i.name()).collect();
    assert_eq!(
        names,
        vec!["h", "h", "h", "cz", "cz", "t", "x_1_2", "y_1_2", "rz", "cx", "h_1_2"]
    );

    let rz = &circuit.instructions()[8];
    assert_eq!(rz.gate, Gate::standard(StandardGate::Rz(0.785)));
    assert_eq!(rz.qubits, vec![GridQubit::new(2, 0)]);

    let cx = &circuit.instructions()[9];
    assert_eq!(cx.qubits, vec![GridQubit::new(1, 1), GridQubit::new(1, 2)]);
}

#[test]
fn test_cz_line_spec() {
    assert_eq!(
        parse_gate_line("0 cz 0 1").unwrap(),
        GateSpec {
            timestep: 0,
            gate: GateName::CZ,
            params: None,
            target_indices: vec![0, 1],
        }
    );
}

#[test]
fn test_out_of_order_timesteps_keep_text_order() {
    let grid = parse_grid("11\n").unwrap();
    let circuit = parse_circuit("5 x 0\n0 z 1\n", &grid).unwrap();
    let seen: Vec<_> = circuit.iter().map(|i| (i.timestep, i.name())).collect();
    assert_eq!(seen, vec![(Some(5), "x"), (Some(0), "z")]);
}

#[test]
fn test_unoccupied_index_rejected() {
    let grid = parse_grid(GRID).unwrap();
    let err = parse_circuit("0 h 0\n", &grid).unwrap_err();
    assert!(matches!(err.root(), ParseError::UnknownQubit { index: 0 }));

    let err = parse_circuit("0 h 16\n", &grid).unwrap_err();
    assert!(matches!(err.root(), ParseError::UnknownQubit { index: 16 }));
}

#[test]
fn test_error_reports_raw_line() {
    let grid = parse_grid(GRID).unwrap();
    let err = CircuitBuilder::new(&grid)
        .read("0 h 1\n\n1 rz((1) 2 # oops\n".as_bytes())
        .unwrap_err();
    match &err {
        ParseError::Line { line, text, .. } => {
            assert_eq!(*line, 3);
            assert_eq!(text, "1 rz((1) 2 # oops");
        }
        other => panic!("expected line context, got {other:?}"),
    }
    assert!(matches!(err.root(), ParseError::Syntax(_)));
}

#[test]
fn test_unsupported_gate_named() {
    let grid = parse_grid(GRID).unwrap();
    let err = parse_circuit("0 foo 1\n", &grid).unwrap_err();
    assert!(err.to_string().contains("foo"));
    assert!(matches!(err.root(), ParseError::UnsupportedGate { name } if name == "foo"));
}

#[test]
fn test_ragged_grid() {
    let err = parse_grid("0110\n111\n").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Shape {
            row: 1,
            expected: 4,
            found: 3
        }
    ));
}
