// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Full-register operators.
//!
//! A single-qubit gate on an `n`-qubit register is the Kronecker product of
//! the gate at the target position with the identity everywhere else. These
//! operators are `2^n × 2^n`, so building and applying them costs `O(4^n)`.
//! The simulator itself never uses them; they are kept as a reference for
//! the localized kernels and for expanding observables.


use crate::{Error, Gate, QubitID, Result, config::MAX_SUPPORTED_QUBITS};
use ndarray::{Array1, Array2, ArrayView1, linalg::kron};
use num_complex::Complex64;

/// A dense `2^n × 2^n` operator on an `n`-qubit register.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseOperator {
    num_qubits: usize,
    matrix: Array2<Complex64>,
}

impl DenseOperator {
    pub fn identity(num_qubits: usize) -> Result<Self> {
        check_size(num_qubits)?;
        Ok(Self {
            num_qubits,
            matrix: Array2::eye(1 << num_qubits),
        })
    }

    /// Expands `gate` on `target` to the full register.
    ///
    /// The product runs from the most-significant qubit down to qubit `0`,
    /// so the leftmost factor addresses the highest bit of the row index.
    pub fn single_qubit(gate: &Gate, target: QubitID, num_qubits: usize) -> Result<Self> {
        check_size(num_qubits)?;
        check_qubit(target, num_qubits)?;
        let identity = Array2::<Complex64>::eye(2);
        let local = Array2::from_shape_fn((2, 2), |(row, col)| gate.get(row, col));
        let mut matrix = Array2::<Complex64>::eye(1);
        for qubit in (0..num_qubits).rev() {
            let factor = if qubit == target { &local } else { &identity };
            matrix = kron(&matrix, factor);
        }
        Ok(Self { num_qubits, matrix })
    }

    /// The controlled-NOT as an explicit permutation matrix.
    ///
    /// Row `i` is swapped with row `i ^ (1 << target)` only from the side of
    /// the pair whose target bit is clear; swapping from both sides would
    /// undo the permutation.
    pub fn cnot(control: QubitID, target: QubitID, num_qubits: usize) -> Result<Self> {
        check_qubit(control, num_qubits)?;
        check_qubit(target, num_qubits)?;
        if control == target {
            return Err(Error::ControlIsTarget(control));
        }
        let mut operator = Self::identity(num_qubits)?;
        let control_mask = 1 << control;
        let target_mask = 1 << target;
        for row in 0..operator.dim() {
            if row & control_mask != 0 && row & target_mask == 0 {
                let partner = row | target_mask;
                for col in 0..operator.dim() {
                    operator.matrix.swap((row, col), (partner, col));
                }
            }
        }
        Ok(operator)
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The side length of the matrix, `2^num_qubits`.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.matrix[(row, col)]
    }

    /// The operator product `self · rhs`.
    pub fn compose(&self, rhs: &Self) -> Result<Self> {
        if self.num_qubits != rhs.num_qubits {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                found: rhs.dim(),
            });
        }
        Ok(Self {
            num_qubits: self.num_qubits,
            matrix: self.matrix.dot(&rhs.matrix),
        })
    }

    /// The largest entry-wise distance between `U·U†` and the identity,
    /// infinite if any entry is not finite.
    #[must_use]
    pub fn unitarity_deviation(&self) -> f64 {
        if !self.matrix.iter().all(|entry| entry.is_finite()) {
            return f64::INFINITY;
        }
        let adjoint = self.matrix.t().mapv(|entry| entry.conj());
        let product = self.matrix.dot(&adjoint);
        let mut deviation: f64 = 0.0;
        for ((row, col), entry) in product.indexed_iter() {
            let expected = if row == col {
                Complex64::new(1.0, 0.0)
            } else {
                Complex64::new(0.0, 0.0)
            };
            let distance = (entry - expected).norm();
            if !distance.is_finite() {
                return f64::INFINITY;
            }
            deviation = deviation.max(distance);
        }
        deviation
    }

    pub fn validate_unitary(&self, tolerance: f64) -> Result<()> {
        let deviation = self.unitarity_deviation();
        if deviation <= tolerance {
            Ok(())
        } else {
            Err(Error::NonUnitaryGate { deviation })
        }
    }

    /// Computes `⟨ψ|self|ψ⟩` for raw amplitudes `ψ`.
    pub fn expectation(&self, amplitudes: &[Complex64]) -> Result<Complex64> {
        if amplitudes.len() != self.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                found: amplitudes.len(),
            });
        }
        let psi = ArrayView1::from(amplitudes);
        let image = self.matrix.dot(&psi);
        Ok(psi.iter().zip(image.iter()).map(|(a, b)| a.conj() * b).sum())
    }

    /// Left-multiplies `amplitudes`. The length must equal [`Self::dim`].
    pub(crate) fn apply(&self, amplitudes: &[Complex64]) -> Vec<Complex64> {
        let psi: Array1<Complex64> = self.matrix.dot(&ArrayView1::from(amplitudes));
        psi.to_vec()
    }
}

fn check_size(num_qubits: usize) -> Result<()> {
    if num_qubits <= MAX_SUPPORTED_QUBITS {
        Ok(())
    } else {
        Err(Error::TooManyQubits {
            requested: num_qubits,
            max: MAX_SUPPORTED_QUBITS,
        })
    }
}

fn check_qubit(qubit: QubitID, num_qubits: usize) -> Result<()> {
    if qubit < num_qubits {
        Ok(())
    } else {
        Err(Error::QubitOutOfRange { qubit, num_qubits })
    }
}
