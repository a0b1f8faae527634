// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use crate::{Error, Result, StateVector, basis_label};
use log::{Level, debug, log_enabled};
use rand::{
    SeedableRng,
    distributions::{Distribution, WeightedIndex},
    rngs::StdRng,
};
use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};

/// Shot counts for every basis state of a register, including the
/// states that were never sampled.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Histogram {
    num_qubits: usize,
    counts: Vec<u64>,
}

impl Histogram {
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The count of basis state `index`.
    #[must_use]
    pub fn count(&self, index: usize) -> u64 {
        self.counts.get(index).copied().unwrap_or_default()
    }

    /// The count of the basis state spelled by `label`, or `None` if
    /// `label` is not a bit-string of the register's width.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<u64> {
        if label.len() != self.num_qubits || !label.bytes().all(|b| b == b'0' || b == b'1') {
            return None;
        }
        if label.is_empty() {
            return self.counts.first().copied();
        }
        let index = usize::from_str_radix(label, 2).ok()?;
        self.counts.get(index).copied()
    }

    /// The raw counts, indexed by basis state.
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Labels and counts in basis-state order.
    pub fn iter(&self) -> impl Iterator<Item = (String, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(index, count)| (basis_label(index, self.num_qubits), *count))
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, u64> {
        self.iter().collect()
    }

    /// The number of shots recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The most frequent basis state. Ties go to the lowest index.
    #[must_use]
    pub fn mode_index(&self) -> usize {
        let mut mode = 0;
        for (index, count) in self.counts.iter().enumerate() {
            if *count > self.counts[mode] {
                mode = index;
            }
        }
        mode
    }

    #[must_use]
    pub fn mode(&self) -> String {
        basis_label(self.mode_index(), self.num_qubits)
    }
}

impl Display for Histogram {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (label, count) in self.iter() {
            writeln!(f, "State {label}: {count}")?;
        }
        Ok(())
    }
}

/// The outcome of sampling a state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Measurement {
    pub histogram: Histogram,
    /// The label of the most frequent basis state.
    pub mode: String,
}

impl StateVector {
    /// Draws `shots` independent samples from the Born-rule distribution.
    ///
    /// The state is left untouched, so repeated calls sample the same
    /// distribution again. Fails if the probabilities do not sum to one
    /// within [`crate::SimulatorConfig::normalization_tolerance`].
    pub fn measure<R>(&self, shots: usize, rng: &mut R) -> Result<Measurement>
    where
        R: rand::Rng + ?Sized,
    {
        if shots == 0 {
            return Err(Error::ZeroShots);
        }
        let probabilities = self.probabilities();
        let total: f64 = probabilities.iter().sum();
        if !total.is_finite() || (total - 1.0).abs() > self.config().normalization_tolerance {
            return Err(Error::NotNormalized { total });
        }
        let distribution =
            WeightedIndex::new(&probabilities).map_err(|_| Error::NotNormalized { total })?;

        let mut counts = vec![0; probabilities.len()];
        for _ in 0..shots {
            counts[distribution.sample(rng)] += 1;
        }
        let histogram = Histogram {
            num_qubits: self.num_qubits(),
            counts,
        };
        if log_enabled!(Level::Debug) {
            for (label, count) in histogram.iter() {
                debug!("State {label}: {count}");
            }
        }
        let mode = histogram.mode();
        debug!("sampled {shots} shots, most frequent state {mode}");
        Ok(Measurement { histogram, mode })
    }

    /// Like [`Self::measure`], with a generator seeded from `seed`, or from
    /// system entropy when `seed` is `None`.
    pub fn measure_seeded(&self, shots: usize, seed: Option<u64>) -> Result<Measurement> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.measure(shots, &mut rng)
    }
}
