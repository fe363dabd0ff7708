//! Console report: one line per strategy, in execution order.

use crate::bench::strategy::{AccessResult, Strategy};

#[derive(Debug, Clone, Default)]
pub struct Report {
    results: Vec<AccessResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: AccessResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[AccessResult] {
        &self.results
    }

    /// First result recorded for `strategy`, if it ran.
    pub fn get(&self, strategy: Strategy) -> Option<&AccessResult> {
        self.results.iter().find(|r| r.strategy == strategy)
    }
}

/// Every result line, newline-terminated.
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for result in &self.results {
            writeln!(f, "{}", result.summary_line())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn result(strategy: Strategy, checksum: u32, millis: u64) -> AccessResult {
        AccessResult {
            strategy,
            checksum,
            elapsed: Duration::from_millis(millis),
            iterations: 1,
            len: 1,
        }
    }

    #[test]
    fn test_display_lines() {
        let mut report = Report::new();
        report.push(result(Strategy::Forward, 711575312, 600));
        report.push(result(Strategy::Reverse, 711575312, 603));
        report.push(result(Strategy::Random, 2015523973, 74_208));

        assert_eq!(
            report.to_string(),
            "Forward sum result: 711575312, tooks: 0.600000\n\
             Reverse sum result: 711575312, tooks: 0.603000\n\
             Random sum result: 2015523973, tooks: 74.208000\n"
        );
    }

    #[test]
    fn test_get_by_strategy() {
        let mut report = Report::new();
        report.push(result(Strategy::Reverse, 7, 1));

        assert_eq!(report.get(Strategy::Reverse).map(|r| r.checksum), Some(7));
        assert!(report.get(Strategy::Forward).is_none());
        assert_eq!(report.results().len(), 1);
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        assert!(Report::new().to_string().is_empty());
    }

    #[test]
    fn test_display_through_io_write() {
        let mut report = Report::new();
        report.push(result(Strategy::Forward, 110, 1));

        let mut buf = Vec::new();
        write!(buf, "{}", report).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Forward sum result: 110, tooks: 0.001000\n"
        );
    }
}
