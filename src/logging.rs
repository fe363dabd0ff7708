//! Logging for benchmark runs
//!
//! Stdout carries only the progress and result lines, so every log layer
//! writes elsewhere: a rolling file under `log_dir`, plus stderr in text
//! mode. Per-strategy results arrive as structured fields (`checksum`,
//! `elapsed_secs`, `ns_per_access`, ...), which the JSON layer keeps
//! queryable.

use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map the configured rotation name; anything unknown means one file.
pub fn rotation_for(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    }
}

/// Install the global subscriber. Keep the returned guard alive for the
/// whole run or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let file_appender = RollingFileAppender::new(
        rotation_for(&config.rotation),
        &config.log_dir,
        &config.log_file,
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stderr_layer = fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(true);
        registry.with(file_layer).with(stderr_layer).init();
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_names() {
        assert_eq!(rotation_for("hourly"), Rotation::HOURLY);
        assert_eq!(rotation_for("daily"), Rotation::DAILY);
        assert_eq!(rotation_for("never"), Rotation::NEVER);
    }

    #[test]
    fn test_unknown_rotation_is_single_file() {
        assert_eq!(rotation_for("weekly"), Rotation::NEVER);
        assert_eq!(rotation_for(""), Rotation::NEVER);
    }

    #[test]
    fn test_shipped_config_rotation() {
        assert_eq!(rotation_for(&AppConfig::default().rotation), Rotation::NEVER);
    }
}
