// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Hard ceiling on the register size, independent of configuration.
///
/// `2^40` amplitudes is 16 TiB of `Complex64`. On narrower targets the
/// ceiling drops so that `2^n` sixteen-byte amplitudes still fit in
/// `isize::MAX` bytes, which is 26 qubits on a 32-bit target.
pub const MAX_SUPPORTED_QUBITS: usize = {
    let addressable = usize::BITS as usize - 6;
    if addressable < 40 { addressable } else { 40 }
};

/// Simulator limits and modes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatorConfig {
    /// The largest register [`crate::StateVector`] will allocate.
    /// The default of 28 qubits is 4 GiB of amplitudes.
    pub max_qubits: usize,
    /// How far the total probability may drift from `1.0`
    /// before sampling refuses to run.
    pub normalization_tolerance: f64,
    /// Whether gates are checked for unitarity before they are applied.
    pub unitarity_check: UnitarityCheck,
    /// Registers of at least this many qubits are updated in parallel.
    pub parallel_threshold: usize,
}

impl SimulatorConfig {
    pub const DEFAULT: Self = Self {
        max_qubits: 28,
        normalization_tolerance: 1e-9,
        unitarity_check: UnitarityCheck::Unchecked,
        parallel_threshold: 14,
    };

    /// The effective qubit limit, clamped to [`MAX_SUPPORTED_QUBITS`].
    #[must_use]
    pub fn qubit_limit(&self) -> usize {
        self.max_qubits.min(MAX_SUPPORTED_QUBITS)
    }

    #[must_use]
    pub fn is_parallel(&self, num_qubits: usize) -> bool {
        num_qubits >= self.parallel_threshold
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Gate validation applied on the hot path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum UnitarityCheck {
    /// Gates are trusted. A non-unitary gate silently breaks normalization.
    #[default]
    Unchecked,
    /// Every gate is checked against `U·U† = I` within `tolerance`.
    Checked { tolerance: f64 },
}
