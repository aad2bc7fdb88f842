//! Grid layout reader.
//!
//! A grid file describes which sites of a rectangular lattice hold a qubit:
//!
//! ```text
//! # 3x4 lattice, corner sites unused
//! 0110
//! 1111
//! 0110
//! ```
//!
//! Lines that are empty or start with `#` are skipped. On every other line
//! only the characters `0` and `1` are kept; anything else is dropped
//! silently. All remaining rows must have the same length. Occupied sites
//! are addressed by their row-major linear index over the full grid, so
//! unoccupied sites leave gaps in the index space.

use std::collections::BTreeMap;
use std::io::BufRead;

use qflex_ir::GridQubit;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::{ParseError, ParseResult};

/// Map from row-major linear index to lattice site, for occupied sites only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QubitIndexMap {
    num_rows: u32,
    num_cols: u32,
    sites: BTreeMap<usize, GridQubit>,
}

impl QubitIndexMap {
    /// Number of rows in the grid.
    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    /// Number of columns in the grid.
    pub fn num_cols(&self) -> u32 {
        self.num_cols
    }

    /// Number of occupied sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Check if no site is occupied.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Look up the site at a linear index.
    pub fn get(&self, index: usize) -> Option<GridQubit> {
        self.sites.get(&index).copied()
    }

    /// Resolve a linear index, failing for unoccupied or out-of-range sites.
    pub fn resolve(&self, index: usize) -> ParseResult<GridQubit> {
        self.get(index)
            .ok_or(ParseError::UnknownQubit { index })
    }

    /// Check whether a linear index names an occupied site.
    pub fn contains(&self, index: usize) -> bool {
        self.sites.contains_key(&index)
    }

    /// Iterate over `(index, site)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, GridQubit)> + '_ {
        self.sites.iter().map(|(i, q)| (*i, *q))
    }
}

/// Read a grid layout from a buffered stream.
#[instrument(skip(reader))]
pub fn read_grid<R: BufRead>(reader: R) -> ParseResult<QubitIndexMap> {
    let mut rows: Vec<Vec<bool>> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let row: Vec<bool> = trimmed
            .chars()
            .filter_map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect();
        debug!("grid row {}: {} columns", rows.len(), row.len());
        rows.push(row);
    }

    let expected = rows.first().ok_or(ParseError::EmptyGrid)?.len();
    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(ParseError::Shape {
            row,
            expected,
            found,
        });
    }

    let num_rows = to_u32(rows.len())?;
    let num_cols = to_u32(expected)?;
    let mut sites = BTreeMap::new();
    for (i, row) in rows.iter().enumerate() {
        for (j, &occupied) in row.iter().enumerate() {
            if occupied {
                let qubit = GridQubit::new(to_u32(i)?, to_u32(j)?);
                sites.insert(qubit.linear_index(num_cols), qubit);
            }
        }
    }

    info!(
        "Read {}x{} grid with {} qubits",
        num_rows,
        num_cols,
        sites.len()
    );

    Ok(QubitIndexMap {
        num_rows,
        num_cols,
        sites,
    })
}

/// Parse a grid layout from a string.
pub fn parse_grid(source: &str) -> ParseResult<QubitIndexMap> {
    read_grid(source.as_bytes())
}

fn to_u32(n: usize) -> ParseResult<u32> {
    u32::try_from(n).map_err(|_| ParseError::syntax(format!("grid dimension {n} too large")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_grid() {
        let map = parse_grid("11\n11\n").unwrap();
        assert_eq!(map.num_rows(), 2);
        assert_eq!(map.num_cols(), 2);
        assert_eq!(map.len(), 4);
        assert_eq!(map.get(3), Some(GridQubit::new(1, 1)));
    }

    #[test]
    fn test_indices_are_absolute() {
        let map = parse_grid("010\n001\n").unwrap();
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(
            entries,
            vec![(1, GridQubit::new(0, 1)), (5, GridQubit::new(1, 2))]
        );
        assert!(!map.contains(0));
        assert!(!map.contains(2));
    }

    #[test]
    fn test_comments_blank_lines_and_noise_ignored() {
        let source = "# layout\n\n  1 0 1  # trailing\n\t1x1y1\n   # indented comment\n";
        let map = parse_grid(source).unwrap();
        assert_eq!(map.num_rows(), 2);
        assert_eq!(map.num_cols(), 3);
        assert_eq!(map.len(), 5);
        assert!(!map.contains(1));
    }

    #[test]
    fn test_inconsistent_columns() {
        let err = parse_grid("111\n11\n111\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Shape {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_empty_grid() {
        assert!(matches!(
            parse_grid("# nothing\n\n").unwrap_err(),
            ParseError::EmptyGrid
        ));
    }

    #[test]
    fn test_resolve_unknown() {
        let map = parse_grid("10\n").unwrap();
        assert_eq!(map.resolve(0).unwrap(), GridQubit::new(0, 0));
        assert!(matches!(
            map.resolve(1),
            Err(ParseError::UnknownQubit { index: 1 })
        ));
        assert!(matches!(
            map.resolve(99),
            Err(ParseError::UnknownQubit { index: 99 })
        ));
    }
}
