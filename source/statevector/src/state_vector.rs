// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{
    Error, Gate, QubitID, Result, SimulatorConfig, UnitarityCheck,
    dense::DenseOperator,
    gate::{rx, ry, rz},
    kernels,
};
use log::{debug, trace};
use num_complex::Complex64;
use std::fmt::{self, Display, Formatter};

/// The state of an `n`-qubit register as `2^n` complex amplitudes.
///
/// Amplitude `i` belongs to the basis state whose bits spell `i`, with
/// qubit `0` as the least-significant bit.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
    config: SimulatorConfig,
}

impl StateVector {
    /// Creates a register of `num_qubits` qubits in the `|0...0⟩` state.
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_config(num_qubits, SimulatorConfig::DEFAULT)
    }

    pub fn with_config(num_qubits: usize, config: SimulatorConfig) -> Result<Self> {
        let max = config.qubit_limit();
        if num_qubits > max {
            return Err(Error::TooManyQubits {
                requested: num_qubits,
                max,
            });
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        debug!("allocated state vector of {num_qubits} qubits");
        Ok(Self {
            num_qubits,
            amplitudes,
            config,
        })
    }

    /// Wraps existing amplitudes. The length must be a power of two.
    /// The amplitudes are taken as given and are not renormalized.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Result<Self> {
        Self::from_amplitudes_with_config(amplitudes, SimulatorConfig::DEFAULT)
    }

    pub fn from_amplitudes_with_config(
        amplitudes: Vec<Complex64>,
        config: SimulatorConfig,
    ) -> Result<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(Error::DimensionMismatch {
                expected: len.next_power_of_two(),
                found: len,
            });
        }
        let num_qubits = len.trailing_zeros() as usize;
        let max = config.qubit_limit();
        if num_qubits > max {
            return Err(Error::TooManyQubits {
                requested: num_qubits,
                max,
            });
        }
        Ok(Self {
            num_qubits,
            amplitudes,
            config,
        })
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[must_use]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    #[must_use]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Consumes the state and returns its amplitudes.
    #[must_use]
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Returns the register to `|0...0⟩`.
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// The Born-rule probability `|amplitude|²` of each basis state.
    #[must_use]
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// The sum of all probabilities. Stays at `1.0` under unitary gates,
    /// up to accumulated rounding.
    #[must_use]
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Applies `gate` to `target`.
    ///
    /// Only the `2^(n-1)` amplitude pairs that differ in the target bit are
    /// touched; the gate is never expanded to the full register.
    pub fn apply_single_qubit_gate(&mut self, gate: &Gate, target: QubitID) -> Result<()> {
        self.check_qubit(target)?;
        if let UnitarityCheck::Checked { tolerance } = self.config.unitarity_check {
            gate.validate_unitary(tolerance)?;
        }
        trace!("applying {gate:?} to qubit {target}");
        let parallel = self.config.is_parallel(self.num_qubits);
        kernels::apply_single_qubit(&mut self.amplitudes, gate, target, parallel);
        Ok(())
    }

    pub fn apply_rx(&mut self, angle: f64, target: QubitID) -> Result<()> {
        self.apply_single_qubit_gate(&rx(angle), target)
    }

    pub fn apply_ry(&mut self, angle: f64, target: QubitID) -> Result<()> {
        self.apply_single_qubit_gate(&ry(angle), target)
    }

    pub fn apply_rz(&mut self, angle: f64, target: QubitID) -> Result<()> {
        self.apply_single_qubit_gate(&rz(angle), target)
    }

    /// Applies a controlled-NOT. The operation is a permutation of the
    /// amplitudes and is its own inverse.
    pub fn apply_cnot(&mut self, control: QubitID, target: QubitID) -> Result<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(Error::ControlIsTarget(control));
        }
        trace!("applying CNOT with control {control} and target {target}");
        let parallel = self.config.is_parallel(self.num_qubits);
        kernels::apply_cx(&mut self.amplitudes, control, target, parallel);
        Ok(())
    }

    /// Left-multiplies the state by a full-register operator. Under
    /// [`UnitarityCheck::Checked`] the operator is validated first.
    pub fn apply_dense_operator(&mut self, operator: &DenseOperator) -> Result<()> {
        if operator.num_qubits() != self.num_qubits {
            return Err(Error::DimensionMismatch {
                expected: self.amplitudes.len(),
                found: operator.dim(),
            });
        }
        if let UnitarityCheck::Checked { tolerance } = self.config.unitarity_check {
            operator.validate_unitary(tolerance)?;
        }
        self.amplitudes = operator.apply(&self.amplitudes);
        Ok(())
    }

    /// Computes `⟨ψ|O|ψ⟩` for a single-qubit observable `O` on `target`.
    pub fn expectation(&self, observable: &Gate, target: QubitID) -> Result<Complex64> {
        self.check_qubit(target)?;
        Ok(kernels::expectation(&self.amplitudes, observable, target))
    }

    /// Computes `⟨self|other⟩`.
    pub fn inner_product(&self, other: &Self) -> Result<Complex64> {
        if self.amplitudes.len() != other.amplitudes.len() {
            return Err(Error::DimensionMismatch {
                expected: self.amplitudes.len(),
                found: other.amplitudes.len(),
            });
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    pub(crate) fn check_qubit(&self, qubit: QubitID) -> Result<()> {
        if qubit < self.num_qubits {
            Ok(())
        } else {
            Err(Error::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            })
        }
    }
}

impl Display for StateVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, amplitude) in self.amplitudes.iter().enumerate() {
            writeln!(
                f,
                "|{}⟩: {:.6}{:+.6}i",
                basis_label(index, self.num_qubits),
                amplitude.re,
                amplitude.im
            )?;
        }
        Ok(())
    }
}

/// The bit-string of basis state `index`, zero-padded to `num_qubits`
/// characters. Qubit `0` is the rightmost character.
#[must_use]
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    if num_qubits == 0 {
        return String::new();
    }
    format!("{index:0num_qubits$b}")
}
