//! Benchmark runner
//!
//! Owns the generator and the workload and drives the fixed phase sequence:
//!
//! ```text
//! Prepare first array.  ─┐
//! Prepare second array. ─┴─ Workload (generated once, read-only after)
//! Test forward access   ──▶ AccessResult
//! Test reverse access   ──▶ AccessResult
//! Test random access    ──▶ AccessResult
//! ```
//!
//! Progress lines go to the caller's writer; results are logged and
//! returned as a [`Report`].

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::bench::access::run_strategy;
use crate::bench::glibc_random::{GlibcRandom, derive_phase_seed};
use crate::bench::report::Report;
use crate::bench::strategy::Strategy;
use crate::bench::workload::Workload;
use crate::core_types::{ARRAY_SIZE, DEFAULT_SEED, ITERATIONS, Seed};
use crate::error::BenchError;
use crate::perf::AccessStats;

/// How phases share the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamMode {
    /// One stream for generation and the random strategy, consumed in order.
    #[default]
    Shared,
    /// Random strategy gets its own generator seeded from the master seed.
    Isolated,
}

/// Ordinal mixed into the seed of the isolated random-access stream.
const RANDOM_PHASE: u32 = 2;

#[derive(Debug, Clone)]
pub struct BenchSettings {
    pub size: usize,
    pub iterations: u32,
    pub seed: Seed,
    pub stream_mode: StreamMode,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            size: ARRAY_SIZE,
            iterations: ITERATIONS,
            seed: DEFAULT_SEED,
            stream_mode: StreamMode::Shared,
        }
    }
}

pub struct BenchmarkRunner {
    settings: BenchSettings,
    rng: GlibcRandom,
}

impl BenchmarkRunner {
    pub fn new(settings: BenchSettings) -> Self {
        let rng = GlibcRandom::new(settings.seed);
        Self { settings, rng }
    }

    /// Run every phase, writing progress lines to `out`.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Report, BenchError> {
        let settings = &self.settings;
        tracing::info!(
            size = settings.size,
            iterations = settings.iterations,
            seed = settings.seed,
            stream_mode = ?settings.stream_mode,
            "benchmark starting"
        );

        let workload = Workload::generate_observed(settings.size, &mut self.rng, |phase| {
            tracing::info!("{}", phase);
            writeln!(out, "{}", phase)?;
            Ok(())
        })?;

        let mut random_rng = match settings.stream_mode {
            StreamMode::Shared => None,
            StreamMode::Isolated => Some(GlibcRandom::new(derive_phase_seed(
                settings.seed,
                RANDOM_PHASE,
            ))),
        };

        let mut report = Report::new();
        for strategy in Strategy::ALL {
            tracing::info!("{}", strategy.progress_line());
            writeln!(out, "{}", strategy.progress_line())?;
            out.flush()?;

            let rng = random_rng.as_mut().unwrap_or(&mut self.rng);
            let result = run_strategy(strategy, &workload, settings.iterations, rng);

            let stats = AccessStats::from(&result);
            tracing::info!(
                strategy = strategy.label(),
                checksum = result.checksum,
                elapsed_secs = result.elapsed_secs(),
                ns_per_access = stats.ns_per_access().unwrap_or(0.0),
                accesses_per_sec = stats.accesses_per_sec().unwrap_or(0.0),
                "strategy finished"
            );
            report.push(result);
        }

        log_slowdowns(&report);
        Ok(report)
    }
}

fn log_slowdowns(report: &Report) {
    let Some(baseline) = report.get(Strategy::Forward).map(AccessStats::from) else {
        return;
    };
    for result in report.results() {
        if result.strategy == Strategy::Forward {
            continue;
        }
        if let Some(ratio) = AccessStats::from(result).slowdown_vs(&baseline) {
            tracing::info!(
                strategy = result.strategy.label(),
                slowdown_vs_forward = ratio,
                "relative cost"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(seed: Seed, stream_mode: StreamMode) -> BenchSettings {
        BenchSettings {
            size: 64,
            iterations: 3,
            seed,
            stream_mode,
        }
    }

    #[test]
    fn test_default_settings_are_fixed_constants() {
        let s = BenchSettings::default();
        assert_eq!(s.size, 100_000);
        assert_eq!(s.iterations, 90_000);
        assert_eq!(s.seed, 1);
        assert_eq!(s.stream_mode, StreamMode::Shared);
    }

    #[test]
    fn test_progress_lines_in_order() {
        let mut runner = BenchmarkRunner::new(small(1, StreamMode::Shared));
        let mut out = Vec::new();
        runner.run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Prepare first array.",
                "Prepare second array.",
                "Test forward access",
                "Test reverse access",
                "Test random access",
            ]
        );
    }

    #[test]
    fn test_report_has_all_strategies() {
        let mut runner = BenchmarkRunner::new(small(1, StreamMode::Shared));
        let report = runner.run(&mut std::io::sink()).unwrap();

        let order: Vec<Strategy> = report.results().iter().map(|r| r.strategy).collect();
        assert_eq!(order, Strategy::ALL.to_vec());
        for r in report.results() {
            assert_eq!(r.iterations, 3);
            assert_eq!(r.len, 64);
        }
    }

    #[test]
    fn test_shared_random_matches_manual_stream() {
        let settings = small(9, StreamMode::Shared);
        let mut runner = BenchmarkRunner::new(settings.clone());
        let report = runner.run(&mut std::io::sink()).unwrap();

        let mut rng = GlibcRandom::new(9);
        let w = Workload::generate(settings.size, &mut rng).unwrap();
        let expected = crate::bench::access::run_random(&w, settings.iterations, &mut rng);

        assert_eq!(
            report.get(Strategy::Random).unwrap().checksum,
            expected.checksum
        );
    }

    #[test]
    fn test_isolated_random_uses_derived_stream() {
        let settings = small(9, StreamMode::Isolated);
        let mut runner = BenchmarkRunner::new(settings.clone());
        let report = runner.run(&mut std::io::sink()).unwrap();

        let mut gen_rng = GlibcRandom::new(9);
        let w = Workload::generate(settings.size, &mut gen_rng).unwrap();
        let mut isolated = GlibcRandom::new(derive_phase_seed(9, RANDOM_PHASE));
        let expected = crate::bench::access::run_random(&w, settings.iterations, &mut isolated);

        assert_eq!(
            report.get(Strategy::Random).unwrap().checksum,
            expected.checksum
        );
    }

    #[test]
    fn test_sequential_checksums_same_in_both_modes() {
        let shared = BenchmarkRunner::new(small(4, StreamMode::Shared))
            .run(&mut std::io::sink())
            .unwrap();
        let isolated = BenchmarkRunner::new(small(4, StreamMode::Isolated))
            .run(&mut std::io::sink())
            .unwrap();

        for s in [Strategy::Forward, Strategy::Reverse] {
            assert_eq!(
                shared.get(s).unwrap().checksum,
                isolated.get(s).unwrap().checksum
            );
        }
    }

    #[test]
    fn test_isolated_seed_0_runs_like_seed_1() {
        let zero = BenchmarkRunner::new(small(0, StreamMode::Isolated))
            .run(&mut std::io::sink())
            .unwrap();
        let one = BenchmarkRunner::new(small(1, StreamMode::Isolated))
            .run(&mut std::io::sink())
            .unwrap();

        for s in Strategy::ALL {
            assert_eq!(zero.get(s).unwrap().checksum, one.get(s).unwrap().checksum);
        }
    }

    #[test]
    fn test_zero_size_is_error() {
        let mut settings = small(1, StreamMode::Shared);
        settings.size = 0;
        let mut out = Vec::new();
        let err = BenchmarkRunner::new(settings).run(&mut out).unwrap_err();
        assert!(matches!(err, BenchError::EmptyWorkload));
        assert!(out.is_empty());
    }

    #[test]
    fn test_stream_mode_serde() {
        let mode: StreamMode = serde_yaml::from_str("isolated").unwrap();
        assert_eq!(mode, StreamMode::Isolated);
        let mode: StreamMode = serde_yaml::from_str("shared").unwrap();
        assert_eq!(mode, StreamMode::Shared);
    }
}
