// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{Error, Result};
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// A single-qubit operator, stored row-major as `[[a, b], [c, d]]`.
///
/// Nothing requires the matrix to be unitary. Applying a non-unitary
/// gate produces a state whose probabilities no longer sum to one,
/// unless the simulator runs with [`crate::UnitarityCheck::Checked`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gate([[Complex64; 2]; 2]);

impl Gate {
    pub const IDENTITY: Self = Self([[ONE, ZERO], [ZERO, ONE]]);

    pub const X: Self = Self([[ZERO, ONE], [ONE, ZERO]]);

    pub const Y: Self = Self([[ZERO, Complex64::new(0.0, -1.0)], [I, ZERO]]);

    pub const Z: Self = Self([[ONE, ZERO], [ZERO, Complex64::new(-1.0, 0.0)]]);

    pub const H: Self = Self([
        [
            Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0),
            Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0),
        ],
        [
            Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0),
            Complex64::new(-std::f64::consts::FRAC_1_SQRT_2, 0.0),
        ],
    ]);

    #[must_use]
    pub const fn new(matrix: [[Complex64; 2]; 2]) -> Self {
        Self(matrix)
    }

    /// Builds a gate from real entries.
    #[must_use]
    pub const fn from_real(matrix: [[f64; 2]; 2]) -> Self {
        Self([
            [
                Complex64::new(matrix[0][0], 0.0),
                Complex64::new(matrix[0][1], 0.0),
            ],
            [
                Complex64::new(matrix[1][0], 0.0),
                Complex64::new(matrix[1][1], 0.0),
            ],
        ])
    }

    #[must_use]
    pub fn matrix(&self) -> &[[Complex64; 2]; 2] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.0[row][col]
    }

    /// Returns `true` if the only non-zero entries are on the diagonal.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        self.0[0][1] == ZERO && self.0[1][0] == ZERO
    }

    /// The conjugate transpose.
    #[must_use]
    pub fn adjoint(&self) -> Self {
        let [[a, b], [c, d]] = self.0;
        Self([[a.conj(), c.conj()], [b.conj(), d.conj()]])
    }

    /// The matrix product `self · rhs`, i.e. `rhs` is applied first.
    #[must_use]
    pub fn matmul(&self, rhs: &Self) -> Self {
        let [[a, b], [c, d]] = self.0;
        let [[e, f], [g, h]] = rhs.0;
        Self([
            [a * e + b * g, a * f + b * h],
            [c * e + d * g, c * f + d * h],
        ])
    }

    /// Applies the gate to the amplitude pair `(|0⟩, |1⟩)`.
    #[inline]
    #[must_use]
    pub fn apply(&self, zero: Complex64, one: Complex64) -> (Complex64, Complex64) {
        let [[a, b], [c, d]] = self.0;
        (a * zero + b * one, c * zero + d * one)
    }

    /// The largest entry-wise distance between `U·U†` and the identity.
    /// Infinite if any entry of the gate or of the product is not finite.
    #[must_use]
    pub fn unitarity_deviation(&self) -> f64 {
        if !self.0.iter().flatten().all(|entry| entry.is_finite()) {
            return f64::INFINITY;
        }
        let product = self.matmul(&self.adjoint());
        let mut deviation: f64 = 0.0;
        for (row, entries) in product.0.iter().enumerate() {
            for (col, entry) in entries.iter().enumerate() {
                let expected = if row == col { ONE } else { ZERO };
                let distance = (entry - expected).norm();
                // `f64::max` would drop a NaN here.
                if !distance.is_finite() {
                    return f64::INFINITY;
                }
                deviation = deviation.max(distance);
            }
        }
        deviation
    }

    #[must_use]
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.unitarity_deviation() <= tolerance
    }

    pub fn validate_unitary(&self, tolerance: f64) -> Result<()> {
        let deviation = self.unitarity_deviation();
        if deviation <= tolerance {
            Ok(())
        } else {
            Err(Error::NonUnitaryGate { deviation })
        }
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[[Complex64; 2]; 2]> for Gate {
    fn from(matrix: [[Complex64; 2]; 2]) -> Self {
        Self(matrix)
    }
}

/// The rotation `exp(-iθX/2)`.
#[must_use]
pub fn rx(angle: f64) -> Gate {
    let sin = (angle / 2.0).sin();
    let cos = (angle / 2.0).cos();
    let cos = Complex64::new(cos, 0.0);
    let off = Complex64::new(0.0, -sin);
    Gate([[cos, off], [off, cos]])
}

/// The rotation `exp(-iθY/2)`.
#[must_use]
pub fn ry(angle: f64) -> Gate {
    let sin = (angle / 2.0).sin();
    let cos = (angle / 2.0).cos();
    Gate::from_real([[cos, -sin], [sin, cos]])
}

/// The rotation `exp(-iθZ/2)`.
#[must_use]
pub fn rz(angle: f64) -> Gate {
    let a = (-I * angle / 2.0).exp();
    let b = (I * angle / 2.0).exp();
    Gate([[a, ZERO], [ZERO, b]])
}
