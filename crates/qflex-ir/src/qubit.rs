//! Lattice qubit coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical qubit site on a 2-D grid, identified by `(row, col)`.
///
/// Ordering is row-major, so sorting a set of grid qubits yields the same
/// order as their linear grid indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridQubit {
    /// Row on the grid.
    pub row: u32,
    /// Column on the grid.
    pub col: u32,
}

impl GridQubit {
    /// Create a new grid qubit.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Row-major linear index of this site on a grid with `num_cols` columns.
    #[inline]
    pub fn linear_index(&self, num_cols: u32) -> usize {
        self.row as usize * num_cols as usize + self.col as usize
    }

    /// Check whether two sites are nearest neighbours on the lattice.
    pub fn is_adjacent(&self, other: &GridQubit) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for GridQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for GridQubit {
    fn from((row, col): (u32, u32)) -> Self {
        GridQubit::new(row, col)
    }
}
