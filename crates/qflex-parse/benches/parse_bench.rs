//! Benchmarks for grid and circuit reading
//!
//! Run with: cargo bench -p qflex-parse

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qflex_parse::{parse_circuit, parse_gate_line, parse_grid, sanitize::sanitize};

/// A fully occupied `n × n` grid.
fn square_grid(n: usize) -> String {
    let row = "1".repeat(n);
    (0..n).map(|_| format!("{row}\n")).collect()
}

/// Layers of Hadamards, CZ entanglers and Z rotations over an `n × n` grid.
fn layered_circuit(n: usize, layers: usize) -> String {
    let mut out = format!("{}\n", n * n);
    let mut t = 0;
    for layer in 0..layers {
        for q in 0..n * n {
            out.push_str(&format!("{t} h {q}\n"));
        }
        t += 1;
        for r in 0..n {
            for c in (layer % 2..n.saturating_sub(1)).step_by(2) {
                let q = r * n + c;
                out.push_str(&format!("{t} cz {q} {}\n", q + 1));
            }
        }
        t += 1;
        for q in 0..n * n {
            out.push_str(&format!("{t} rz(0.25) {q}  # phase\n"));
        }
        t += 1;
    }
    out
}

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    group.bench_function("sanitize", |b| {
        b.iter(|| sanitize(black_box("  12 \t rz (  0.5 , 1.2 )  7   # comment")));
    });

    group.bench_function("parse_gate_line", |b| {
        b.iter(|| parse_gate_line(black_box("12 rz(0.5) 7")).unwrap());
    });

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    for n in &[4, 8, 16, 32] {
        let source = square_grid(*n);
        group.bench_with_input(BenchmarkId::new("square", n), &source, |b, s| {
            b.iter(|| parse_grid(black_box(s)).unwrap());
        });
    }

    group.finish();
}

fn bench_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit");

    for n in &[4, 8, 12] {
        let grid = parse_grid(&square_grid(*n)).unwrap();
        let source = layered_circuit(*n, 8);
        group.bench_with_input(BenchmarkId::new("layered", n), &source, |b, s| {
            b.iter(|| parse_circuit(black_box(s), &grid).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sanitize, bench_grid, bench_circuit);
criterion_main!(benches);
