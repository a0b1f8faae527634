// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::QubitID;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum Error {
    #[error("cannot allocate a state of {requested} qubits, the limit is {max}")]
    #[diagnostic(code("StateVector.TooManyQubits"))]
    #[diagnostic(help(
        "the state vector holds 2^n amplitudes; raise `SimulatorConfig::max_qubits` only if the memory is available"
    ))]
    TooManyQubits { requested: usize, max: usize },
    #[error("the number of shots must be positive")]
    #[diagnostic(code("StateVector.ZeroShots"))]
    ZeroShots,
    #[error("control and target are both qubit {0}")]
    #[diagnostic(code("StateVector.ControlIsTarget"))]
    ControlIsTarget(QubitID),
    #[error("qubit {qubit} is out of range for a register of {num_qubits} qubits")]
    #[diagnostic(code("StateVector.QubitOutOfRange"))]
    QubitOutOfRange { qubit: QubitID, num_qubits: usize },
    #[error("measurement probabilities sum to {total}, expected 1")]
    #[diagnostic(code("StateVector.NotNormalized"))]
    #[diagnostic(help(
        "a non-unitary gate was applied to the state; enable `UnitarityCheck::Checked` to find it"
    ))]
    NotNormalized { total: f64 },
    #[error("gate is not unitary, U·U† deviates from the identity by {deviation:e}")]
    #[diagnostic(code("StateVector.NonUnitaryGate"))]
    NonUnitaryGate { deviation: f64 },
    #[error("expected {expected} elements, found {found}")]
    #[diagnostic(code("StateVector.DimensionMismatch"))]
    DimensionMismatch { expected: usize, found: usize },
}

/// The broad category of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidArgument,
    IndexOutOfRange,
    NormalizationError,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooManyQubits { .. }
            | Self::ZeroShots
            | Self::ControlIsTarget(..)
            | Self::NonUnitaryGate { .. }
            | Self::DimensionMismatch { .. } => ErrorKind::InvalidArgument,
            Self::QubitOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::NotNormalized { .. } => ErrorKind::NormalizationError,
        }
    }
}
