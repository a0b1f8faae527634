// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A dense state-vector simulator for small qubit registers.
//!
//! The state of `n` qubits is stored as `2^n` complex amplitudes. Qubit `0`
//! is the least-significant bit of a basis index, so the basis label of a
//! state reads most-significant qubit first and qubit `0` is the rightmost
//! character.
//!
//! Memory and time are exponential in the qubit count; see
//! [`SimulatorConfig::max_qubits`] for the practical ceiling.

pub mod config;
pub mod dense;
mod error;
pub mod gate;
mod kernels;
pub mod measurement;
mod state_vector;

pub use config::{SimulatorConfig, UnitarityCheck};
pub use error::{Error, ErrorKind, Result};
pub use gate::Gate;
pub use measurement::{Histogram, Measurement};
pub use num_complex::Complex64;
pub use state_vector::{StateVector, basis_label};

/// A qubit ID.
pub type QubitID = usize;
