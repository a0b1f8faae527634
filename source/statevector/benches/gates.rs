// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use statevector::{Gate, SimulatorConfig, StateVector, dense::DenseOperator};
use std::hint::black_box;

const SEED: u64 = 1000;

fn superposed(num_qubits: usize, config: SimulatorConfig) -> StateVector {
    let mut state = StateVector::with_config(num_qubits, config).expect("state should allocate");
    for q in 0..num_qubits {
        state
            .apply_single_qubit_gate(&Gate::H, q)
            .expect("qubit should be in range");
    }
    state
}

fn single_qubit_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rx");
    let sequential = SimulatorConfig {
        parallel_threshold: usize::MAX,
        ..SimulatorConfig::DEFAULT
    };
    for num_qubits in [10, 16, 20] {
        let mut state = superposed(num_qubits, sequential);
        group.bench_with_input(
            BenchmarkId::new("sequential", num_qubits),
            &num_qubits,
            |b, &n| {
                b.iter(|| black_box(state.apply_rx(0.3, n / 2)));
            },
        );
        let mut state = superposed(num_qubits, SimulatorConfig::DEFAULT);
        group.bench_with_input(
            BenchmarkId::new("default", num_qubits),
            &num_qubits,
            |b, &n| {
                b.iter(|| black_box(state.apply_rx(0.3, n / 2)));
            },
        );
    }
    group.finish();
}

fn dense_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("rx_dense");
    for num_qubits in [6, 8, 10] {
        let mut state = superposed(num_qubits, SimulatorConfig::DEFAULT);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            &num_qubits,
            |b, &n| {
                b.iter(|| {
                    let op = DenseOperator::single_qubit(&statevector::gate::rx(0.3), n / 2, n)
                        .expect("qubit should be in range");
                    black_box(state.apply_dense_operator(&op))
                });
            },
        );
    }
    group.finish();
}

fn cnot(c: &mut Criterion) {
    let mut state = superposed(20, SimulatorConfig::DEFAULT);
    c.bench_function("cnot_20", |b| {
        b.iter(|| black_box(state.apply_cnot(19, 3)));
    });
}

fn sampling(c: &mut Criterion) {
    let state = superposed(12, SimulatorConfig::DEFAULT);
    let mut rng = StdRng::seed_from_u64(SEED);
    c.bench_function("measure_12q_10000_shots", |b| {
        b.iter(|| black_box(state.measure(10_000, &mut rng)));
    });
}

criterion_group!(benches, single_qubit_gate, dense_expansion, cnot, sampling);
criterion_main!(benches);
