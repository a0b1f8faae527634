// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! In-place gate kernels over the raw amplitude array.
//!
//! Both kernels walk the array in blocks of `2 * stride` amplitudes, where
//! `stride = 1 << target`. The first half of a block has the target bit
//! clear and the second half has it set, so zipping the halves visits every
//! pair `(i, i | stride)` exactly once. Pairs are disjoint, which is what
//! lets the parallel variants skip any synchronization.

use crate::{Gate, QubitID};
use num_complex::Complex64;
use rayon::prelude::*;

/// Parallel work items smaller than this are not split further.
const MIN_PARALLEL_LEN: usize = 1 << 10;

pub(crate) fn apply_single_qubit(
    amplitudes: &mut [Complex64],
    gate: &Gate,
    target: QubitID,
    parallel: bool,
) {
    let stride = 1 << target;
    if gate.is_diagonal() {
        let zero_phase = gate.get(0, 0);
        let one_phase = gate.get(1, 1);
        let update = |(zero, one): (&mut Complex64, &mut Complex64)| {
            *zero *= zero_phase;
            *one *= one_phase;
        };
        if parallel {
            amplitudes.par_chunks_mut(2 * stride).for_each(|block| {
                let (zeros, ones) = block.split_at_mut(stride);
                zeros
                    .par_iter_mut()
                    .zip(ones.par_iter_mut())
                    .with_min_len(MIN_PARALLEL_LEN)
                    .for_each(update);
            });
        } else {
            for block in amplitudes.chunks_mut(2 * stride) {
                let (zeros, ones) = block.split_at_mut(stride);
                zeros.iter_mut().zip(ones.iter_mut()).for_each(update);
            }
        }
        return;
    }

    let update = |(zero, one): (&mut Complex64, &mut Complex64)| {
        (*zero, *one) = gate.apply(*zero, *one);
    };
    if parallel {
        amplitudes.par_chunks_mut(2 * stride).for_each(|block| {
            let (zeros, ones) = block.split_at_mut(stride);
            zeros
                .par_iter_mut()
                .zip(ones.par_iter_mut())
                .with_min_len(MIN_PARALLEL_LEN)
                .for_each(update);
        });
    } else {
        for block in amplitudes.chunks_mut(2 * stride) {
            let (zeros, ones) = block.split_at_mut(stride);
            zeros.iter_mut().zip(ones.iter_mut()).for_each(update);
        }
    }
}

/// Swaps `amplitudes[i]` with `amplitudes[i ^ (1 << target)]` for every `i`
/// whose control bit is set. Requires `control != target`.
pub(crate) fn apply_cx(
    amplitudes: &mut [Complex64],
    control: QubitID,
    target: QubitID,
    parallel: bool,
) {
    debug_assert_ne!(control, target, "control and target should be distinct");
    let control_mask = 1 << control;
    let stride = 1 << target;
    if parallel {
        amplitudes
            .par_chunks_mut(2 * stride)
            .enumerate()
            .for_each(|(block_index, block)| {
                let base = block_index * 2 * stride;
                let (zeros, ones) = block.split_at_mut(stride);
                zeros
                    .par_iter_mut()
                    .zip(ones.par_iter_mut())
                    .enumerate()
                    .with_min_len(MIN_PARALLEL_LEN)
                    .for_each(|(offset, (zero, one))| {
                        if (base + offset) & control_mask != 0 {
                            std::mem::swap(zero, one);
                        }
                    });
            });
    } else {
        for (block_index, block) in amplitudes.chunks_mut(2 * stride).enumerate() {
            let base = block_index * 2 * stride;
            let (zeros, ones) = block.split_at_mut(stride);
            for (offset, (zero, one)) in zeros.iter_mut().zip(ones.iter_mut()).enumerate() {
                if (base + offset) & control_mask != 0 {
                    std::mem::swap(zero, one);
                }
            }
        }
    }
}

/// Computes `⟨ψ|G_target|ψ⟩` without expanding `G` to the full register.
pub(crate) fn expectation(amplitudes: &[Complex64], gate: &Gate, target: QubitID) -> Complex64 {
    let stride = 1 << target;
    amplitudes
        .chunks(2 * stride)
        .flat_map(|block| {
            let (zeros, ones) = block.split_at(stride);
            zeros.iter().zip(ones)
        })
        .map(|(zero, one)| {
            let (new_zero, new_one) = gate.apply(*zero, *one);
            zero.conj() * new_zero + one.conj() * new_one
        })
        .sum()
}
