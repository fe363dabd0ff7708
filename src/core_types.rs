//! Core types and fixed benchmark constants
//!
//! The array length and iteration count are compile-time constants on
//! purpose: the benchmark only compares access orders, never sizes.

/// Wrapping (mod 2^32) sum of every accessed element pair.
///
/// Only exists so the optimizer cannot drop the access loop; it is not a
/// correctness oracle.
pub type Checksum = u32;

/// Generator seed, same width as `srand()` takes.
pub type Seed = u32;

/// Elements per workload sequence.
pub const ARRAY_SIZE: usize = 100_000;

/// Outer repetitions per strategy.
pub const ITERATIONS: u32 = 90_000;

/// Seed `rand()` uses when `srand()` is never called.
pub const DEFAULT_SEED: Seed = 1;
