//! Access strategies and their per-run result record.

use std::time::Duration;

use crate::core_types::Checksum;

/// Access-order policy over the workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Forward,
    Reverse,
    Random,
}

impl Strategy {
    /// Execution order of a full run.
    pub const ALL: [Strategy; 3] = [Strategy::Forward, Strategy::Reverse, Strategy::Random];

    /// Label used in the result line.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Forward => "Forward",
            Strategy::Reverse => "Reverse",
            Strategy::Random => "Random",
        }
    }

    /// Progress line printed before the strategy runs.
    pub fn progress_line(&self) -> &'static str {
        match self {
            Strategy::Forward => "Test forward access",
            Strategy::Reverse => "Test reverse access",
            Strategy::Random => "Test random access",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one strategy run. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessResult {
    pub strategy: Strategy,
    pub checksum: Checksum,
    pub elapsed: Duration,
    /// Outer repetitions the loop ran.
    pub iterations: u32,
    /// Inner steps per repetition (the workload length).
    pub len: usize,
}

impl AccessResult {
    /// Elapsed wall-clock time in seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Result line, e.g. `Forward sum result: 711575312, tooks: 0.600869`
    pub fn summary_line(&self) -> String {
        format!(
            "{} sum result: {}, tooks: {:.6}",
            self.strategy.label(),
            self.checksum,
            self.elapsed_secs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Strategy::Forward.to_string(), "Forward");
        assert_eq!(Strategy::Reverse.to_string(), "Reverse");
        assert_eq!(Strategy::Random.to_string(), "Random");
    }

    #[test]
    fn test_progress_lines() {
        assert_eq!(Strategy::Forward.progress_line(), "Test forward access");
        assert_eq!(Strategy::Reverse.progress_line(), "Test reverse access");
        assert_eq!(Strategy::Random.progress_line(), "Test random access");
    }

    #[test]
    fn test_all_order() {
        assert_eq!(
            Strategy::ALL,
            [Strategy::Forward, Strategy::Reverse, Strategy::Random]
        );
    }

    #[test]
    fn test_summary_line_format() {
        let result = AccessResult {
            strategy: Strategy::Forward,
            checksum: 711575312,
            elapsed: Duration::from_micros(600_869),
            iterations: 90_000,
            len: 100_000,
        };
        assert_eq!(
            result.summary_line(),
            "Forward sum result: 711575312, tooks: 0.600869"
        );
    }

    #[test]
    fn test_summary_line_pads_six_decimals() {
        let result = AccessResult {
            strategy: Strategy::Random,
            checksum: 0,
            elapsed: Duration::from_secs(74),
            iterations: 1,
            len: 1,
        };
        assert_eq!(result.summary_line(), "Random sum result: 0, tooks: 74.000000");
    }
}
