// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::Histogram;
use crate::{Error, ErrorKind, Gate, StateVector};
use expect_test::expect;
use num_complex::Complex64;
use rand::{SeedableRng, rngs::StdRng};
use std::f64::consts::{FRAC_PI_2, PI};

const SEED: u64 = 1000;

#[test]
fn zero_shots_is_rejected() {
    let state = StateVector::new(1).expect("state should allocate");
    let err = state
        .measure_seeded(0, Some(SEED))
        .expect_err("zero shots should be rejected");
    assert_eq!(err, Error::ZeroShots);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn rx_pi_always_measures_one() {
    let mut state = StateVector::new(1).expect("state should allocate");
    state.apply_rx(PI, 0).expect("qubit should be in range");
    let measurement = state
        .measure_seeded(1000, Some(SEED))
        .expect("state should be normalized");
    assert_eq!(measurement.mode, "1");
    assert_eq!(measurement.histogram.get("1"), Some(1000));
    assert_eq!(measurement.histogram.get("0"), Some(0));
}

#[test]
fn uniform_superposition_samples_every_state() {
    let mut state = StateVector::new(2).expect("state should allocate");
    state.apply_rx(FRAC_PI_2, 0).expect("qubit should be in range");
    state.apply_rx(FRAC_PI_2, 1).expect("qubit should be in range");
    let measurement = state
        .measure_seeded(4000, Some(SEED))
        .expect("state should be normalized");
    let counts = measurement.histogram.to_map();
    assert_eq!(
        counts.keys().collect::<Vec<_>>(),
        vec!["00", "01", "10", "11"]
    );
    for (label, count) in counts {
        assert!(
            (850..=1150).contains(&count),
            "state {label} was sampled {count} times"
        );
    }
    assert_eq!(measurement.histogram.total(), 4000);
}

#[test]
fn cnot_on_initial_state_always_measures_zero() {
    let mut state = StateVector::new(2).expect("state should allocate");
    state.apply_cnot(0, 1).expect("qubits should be in range");
    let measurement = state
        .measure_seeded(100, Some(SEED))
        .expect("state should be normalized");
    assert_eq!(measurement.mode, "00");
    expect![[r#"
        State 00: 100
        State 01: 0
        State 10: 0
        State 11: 0
    "#]]
    .assert_eq(&measurement.histogram.to_string());
}

#[test]
fn bell_state_only_yields_correlated_outcomes() {
    let mut state = StateVector::new(2).expect("state should allocate");
    state
        .apply_single_qubit_gate(&Gate::H, 0)
        .expect("qubit should be in range");
    state.apply_cnot(0, 1).expect("qubits should be in range");
    let histogram = state
        .measure_seeded(2000, Some(SEED))
        .expect("state should be normalized")
        .histogram;
    assert_eq!(histogram.count(0b01), 0);
    assert_eq!(histogram.count(0b10), 0);
    assert_eq!(histogram.count(0b00) + histogram.count(0b11), 2000);
}

#[test]
fn same_seed_gives_same_histogram() {
    let mut state = StateVector::new(3).expect("state should allocate");
    for q in 0..3 {
        state.apply_rx(1.0, q).expect("qubit should be in range");
    }
    let first = state
        .measure_seeded(500, Some(7))
        .expect("state should be normalized");
    let second = state
        .measure_seeded(500, Some(7))
        .expect("state should be normalized");
    assert_eq!(first, second);

    let mut rng = StdRng::seed_from_u64(7);
    let injected = state
        .measure(500, &mut rng)
        .expect("state should be normalized");
    assert_eq!(first, injected);
}

#[test]
fn measuring_does_not_collapse_the_state() {
    let mut state = StateVector::new(2).expect("state should allocate");
    state
        .apply_single_qubit_gate(&Gate::H, 1)
        .expect("qubit should be in range");
    let before = state.clone();
    let mut rng = StdRng::seed_from_u64(SEED);
    state
        .measure(10, &mut rng)
        .expect("state should be normalized");
    state
        .measure(10, &mut rng)
        .expect("state should be normalized");
    assert_eq!(state, before);
}

#[test]
fn unnormalized_state_cannot_be_sampled() {
    let one = Complex64::new(1.0, 0.0);
    let state = StateVector::from_amplitudes(vec![one, one]).expect("length is a power of two");
    let err = state
        .measure_seeded(10, Some(SEED))
        .expect_err("probabilities sum to 2");
    assert_eq!(err, Error::NotNormalized { total: 2.0 });
    assert_eq!(err.kind(), ErrorKind::NormalizationError);

    let nan = Complex64::new(f64::NAN, 0.0);
    let state = StateVector::from_amplitudes(vec![nan, one]).expect("length is a power of two");
    assert!(state.measure_seeded(10, Some(SEED)).is_err());
}

#[test]
fn zero_qubit_register_measures_empty_label() {
    let state = StateVector::new(0).expect("state should allocate");
    let measurement = state
        .measure_seeded(5, Some(SEED))
        .expect("state should be normalized");
    assert_eq!(measurement.mode, "");
    assert_eq!(measurement.histogram.get(""), Some(5));
}

#[test]
fn mode_ties_go_to_lowest_index() {
    let histogram = Histogram {
        num_qubits: 2,
        counts: vec![5, 7, 7, 1],
    };
    assert_eq!(histogram.mode_index(), 1);
    assert_eq!(histogram.mode(), "01");

    let empty = Histogram {
        num_qubits: 2,
        counts: vec![0, 0, 0, 0],
    };
    assert_eq!(empty.mode(), "00");
}

#[test]
fn histogram_lookup_by_label() {
    let histogram = Histogram {
        num_qubits: 3,
        counts: vec![1, 2, 3, 4, 5, 6, 7, 8],
    };
    assert_eq!(histogram.get("000"), Some(1));
    assert_eq!(histogram.get("110"), Some(7));
    assert_eq!(histogram.get("11"), None);
    assert_eq!(histogram.get("1x0"), None);
    assert_eq!(histogram.get("+11"), None);
    assert_eq!(histogram.count(6), 7);
    assert_eq!(histogram.count(8), 0);
    assert_eq!(histogram.total(), 36);
}
