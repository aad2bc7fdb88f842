//! Unitary matrices for the supported gates.
//!
//! Single-qubit operators are [`Unitary2x2`], two-qubit operators are
//! [`Unitary4x4`]. Both store elements row-major. Two-qubit matrices use the
//! basis `|q0 q1⟩` with the first operand as the most significant bit.

use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Tolerance for floating point comparisons.
const EPSILON: f64 = 1e-10;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A 2x2 unitary matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary2x2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

impl Unitary2x2 {
    /// Create a new 2x2 matrix.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// Create the identity matrix.
    pub fn identity() -> Self {
        Self::new(ONE, ZERO, ZERO, ONE)
    }

    /// Create a Hadamard gate.
    pub fn h() -> Self {
        let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Self::new(s, s, s, -s)
    }

    /// Create a Pauli-X gate.
    pub fn x() -> Self {
        Self::new(ZERO, ONE, ONE, ZERO)
    }

    /// Create a Pauli-Y gate.
    pub fn y() -> Self {
        Self::new(ZERO, Complex64::new(0.0, -1.0), Complex64::new(0.0, 1.0), ZERO)
    }

    /// Create a Pauli-Z gate.
    pub fn z() -> Self {
        Self::new(ONE, ZERO, ZERO, -ONE)
    }

    /// Create a T gate, `Z^0.25`.
    pub fn t() -> Self {
        Self::z().pow_involution(0.25)
    }

    /// Create `X^0.5`.
    pub fn sqrt_x() -> Self {
        Self::x().pow_involution(0.5)
    }

    /// Create `Y^0.5`.
    pub fn sqrt_y() -> Self {
        Self::y().pow_involution(0.5)
    }

    /// Create `H^0.5`.
    pub fn sqrt_h() -> Self {
        Self::h().pow_involution(0.5)
    }

    /// Create an RZ rotation matrix.
    pub fn rz(theta: f64) -> Self {
        let exp_neg = Complex64::from_polar(1.0, -theta / 2.0);
        let exp_pos = Complex64::from_polar(1.0, theta / 2.0);
        Self::new(exp_neg, ZERO, ZERO, exp_pos)
    }

    /// Raise an involution (a unitary with eigenvalues ±1) to a real power.
    ///
    /// Uses the eigen-phase convention `G^t = P₊ + e^{iπt} P₋` with
    /// `P± = (I ± G) / 2`, so the +1 eigenspace carries no phase.
    pub fn pow_involution(&self, exponent: f64) -> Self {
        let phase = Complex64::from_polar(1.0, PI * exponent);
        let id = Self::identity();
        let mut data = [ZERO; 4];
        for (k, out) in data.iter_mut().enumerate() {
            let plus = (id.data[k] + self.data[k]) * 0.5;
            let minus = (id.data[k] - self.data[k]) * 0.5;
            *out = plus + phase * minus;
        }
        Self { data }
    }

    /// Multiply this matrix by another: self * other.
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Get the conjugate transpose (dagger).
    pub fn dagger(&self) -> Self {
        Self::new(
            self.data[0].conj(),
            self.data[2].conj(),
            self.data[1].conj(),
            self.data[3].conj(),
        )
    }

    /// Tensor product `self ⊗ other`, with `self` on the most significant qubit.
    pub fn kron(&self, other: &Self) -> Unitary4x4 {
        let mut data = [ZERO; 16];
        for i1 in 0..2 {
            for j1 in 0..2 {
                let a = self.data[i1 * 2 + j1];
                for i2 in 0..2 {
                    for j2 in 0..2 {
                        data[(i1 * 2 + i2) * 4 + (j1 * 2 + j2)] = a * other.data[i2 * 2 + j2];
                    }
                }
            }
        }
        Unitary4x4 { data }
    }

    /// Check element-wise equality within [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq_slices(&self.data, &other.data)
    }

    /// Check `U† U = I`.
    pub fn is_unitary(&self) -> bool {
        self.dagger().mul(self).approx_eq(&Self::identity())
    }
}

impl Default for Unitary2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Unitary2x2 {
    type Output = Self;

    #[allow(clippy::needless_pass_by_value)]
    fn mul(self, rhs: Self) -> Self::Output {
        Unitary2x2::mul(&self, &rhs)
    }
}

/// A 4x4 unitary matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary4x4 {
    /// The matrix elements in row-major order.
    pub data: [Complex64; 16],
}

impl Unitary4x4 {
    /// Create the identity matrix.
    pub fn identity() -> Self {
        let mut data = [ZERO; 16];
        for i in 0..4 {
            data[i * 5] = ONE;
        }
        Self { data }
    }

    /// Controlled-X with the first qubit as control.
    pub fn cx() -> Self {
        let mut data = [ZERO; 16];
        data[0] = ONE;
        data[5] = ONE;
        data[11] = ONE;
        data[14] = ONE;
        Self { data }
    }

    /// Controlled-Z.
    pub fn cz() -> Self {
        let mut u = Self::identity();
        u.data[15] = -ONE;
        u
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * 4 + col]
    }

    /// Multiply this matrix by another: self * other.
    pub fn mul(&self, other: &Self) -> Self {
        let mut data = [ZERO; 16];
        for i in 0..4 {
            for j in 0..4 {
                data[i * 4 + j] = (0..4).map(|k| self.get(i, k) * other.get(k, j)).sum();
            }
        }
        Self { data }
    }

    /// Get the conjugate transpose (dagger).
    pub fn dagger(&self) -> Self {
        let mut data = [ZERO; 16];
        for i in 0..4 {
            for j in 0..4 {
                data[i * 4 + j] = self.get(j, i).conj();
            }
        }
        Self { data }
    }

    /// Check element-wise equality within [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq_slices(&self.data, &other.data)
    }

    /// Check `U† U = I`.
    pub fn is_unitary(&self) -> bool {
        self.dagger().mul(self).approx_eq(&Self::identity())
    }
}

impl Default for Unitary4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

fn approx_eq_slices(a: &[Complex64], b: &[Complex64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).norm() < EPSILON)
}
