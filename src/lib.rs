//! RAM Speed Test - memory-access pattern timing
//!
//! Times forward, reverse and pseudo-random reads over two fixed-size `u32`
//! arrays to show what cache locality is worth.
//!
//! # Modules
//!
//! - [`core_types`] - Type aliases and fixed constants
//! - [`bench`] - Generator, workload, access loops, runner and report
//! - [`perf`] - Per-access figures derived from a run
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - Error types

// Core types - must be first!
pub mod core_types;

pub mod bench;
pub mod config;
pub mod error;
pub mod logging;
pub mod perf;

// Convenient re-exports at crate root
pub use bench::access::{run_forward, run_random, run_reverse, run_strategy};
pub use bench::glibc_random::{GlibcRandom, RAND_MAX};
pub use bench::report::Report;
pub use bench::runner::{BenchSettings, BenchmarkRunner, StreamMode};
pub use bench::strategy::{AccessResult, Strategy};
pub use bench::workload::{Workload, generate_workload};
pub use core_types::{ARRAY_SIZE, Checksum, DEFAULT_SEED, ITERATIONS, Seed};
pub use error::{BenchError, ConfigError};
pub use perf::AccessStats;
