//! Timed access loops
//!
//! Each loop sums `first[i] + second[i]` into a wrapping `u32` for
//! `iterations` outer repetitions. The clock starts right before the outer
//! loop and stops right after it, so every repetition is inside the window.
//!
//! Reads and the accumulator go through `black_box`; without it the
//! sequential sums fold into a multiply and nothing touches memory.

// Explicit index loops keep the access order visible; iterator adaptors
// could hide or reorder the memory traffic being measured.
#![allow(clippy::needless_range_loop)]

use std::hint::black_box;
use std::time::Instant;

use rand::RngCore;

use crate::bench::strategy::{AccessResult, Strategy};
use crate::bench::workload::Workload;
use crate::core_types::Checksum;

/// Walk indices `0..N` ascending.
pub fn run_forward(workload: &Workload, iterations: u32) -> AccessResult {
    let first = workload.first();
    let second = workload.second();
    let n = workload.len();

    let start = Instant::now();
    let mut sum: Checksum = 0;
    for _ in 0..iterations {
        for i in 0..n {
            sum = sum.wrapping_add(black_box(first[i]).wrapping_add(black_box(second[i])));
        }
        sum = black_box(sum);
    }
    let elapsed = start.elapsed();

    finish(Strategy::Forward, sum, elapsed, iterations, n)
}

/// Walk indices `N-1..=0` descending. Same pairs as forward, so the same
/// checksum.
pub fn run_reverse(workload: &Workload, iterations: u32) -> AccessResult {
    let first = workload.first();
    let second = workload.second();
    let n = workload.len();

    let start = Instant::now();
    let mut sum: Checksum = 0;
    for _ in 0..iterations {
        for i in (0..n).rev() {
            sum = sum.wrapping_add(black_box(first[i]).wrapping_add(black_box(second[i])));
        }
        sum = black_box(sum);
    }
    let elapsed = start.elapsed();

    finish(Strategy::Reverse, sum, elapsed, iterations, n)
}

/// N steps per repetition, each at a freshly drawn index `next_u32() % N`.
///
/// Indices are resampled every step rather than following a permutation, so
/// the checksum is not comparable with the sequential ones. The draw is part
/// of the timed loop, as it is part of the access pattern.
pub fn run_random<R: RngCore + ?Sized>(
    workload: &Workload,
    iterations: u32,
    rng: &mut R,
) -> AccessResult {
    let first = workload.first();
    let second = workload.second();
    let n = workload.len();

    let start = Instant::now();
    let mut sum: Checksum = 0;
    for _ in 0..iterations {
        for _ in 0..n {
            let p = random_index(rng, n);
            sum = sum.wrapping_add(black_box(first[p]).wrapping_add(black_box(second[p])));
        }
        sum = black_box(sum);
    }
    let elapsed = start.elapsed();

    finish(Strategy::Random, sum, elapsed, iterations, n)
}

/// Dispatch on `strategy`. Only `Random` consumes from `rng`.
pub fn run_strategy<R: RngCore + ?Sized>(
    strategy: Strategy,
    workload: &Workload,
    iterations: u32,
    rng: &mut R,
) -> AccessResult {
    match strategy {
        Strategy::Forward => run_forward(workload, iterations),
        Strategy::Reverse => run_reverse(workload, iterations),
        Strategy::Random => run_random(workload, iterations, rng),
    }
}

/// Reduce a raw draw into `[0, n)`. `n` must be non-zero.
#[inline]
pub fn random_index<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> usize {
    debug_assert!(n > 0, "workload must not be empty");
    rng.next_u32() as usize % n
}

fn finish(
    strategy: Strategy,
    checksum: Checksum,
    elapsed: std::time::Duration,
    iterations: u32,
    len: usize,
) -> AccessResult {
    tracing::debug!(
        strategy = strategy.label(),
        checksum,
        elapsed_secs = elapsed.as_secs_f64(),
        "access loop finished"
    );
    AccessResult {
        strategy,
        checksum,
        elapsed,
        iterations,
        len,
    }
}
