//! Performance Metrics - per-access cost derived from a strategy run
//!
//! Single-run figures only: no warm-up, no trials, no variance. These feed
//! structured log fields; the console report stays the plain result lines.

use crate::bench::strategy::AccessResult;

/// Derived timing for one [`AccessResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessStats {
    /// `iterations * len` element-pair reads
    pub total_accesses: u64,
    pub elapsed_ns: u64,
}

impl AccessStats {
    /// Average nanoseconds per element-pair access.
    ///
    /// Returns `None` when nothing was accessed.
    pub fn ns_per_access(&self) -> Option<f64> {
        if self.total_accesses == 0 {
            return None;
        }
        Some(self.elapsed_ns as f64 / self.total_accesses as f64)
    }

    /// Accesses per second.
    pub fn accesses_per_sec(&self) -> Option<f64> {
        if self.elapsed_ns == 0 {
            return None;
        }
        Some(self.total_accesses as f64 * 1e9 / self.elapsed_ns as f64)
    }

    /// How many times slower than `baseline` per access (2.0 = twice as slow).
    pub fn slowdown_vs(&self, baseline: &AccessStats) -> Option<f64> {
        let own = self.ns_per_access()?;
        let base = baseline.ns_per_access()?;
        if base == 0.0 {
            return None;
        }
        Some(own / base)
    }
}

impl From<&AccessResult> for AccessStats {
    fn from(result: &AccessResult) -> Self {
        AccessStats {
            total_accesses: result.iterations as u64 * result.len as u64,
            elapsed_ns: result.elapsed.as_nanos().min(u64::MAX as u128) as u64,
        }
    }
}
