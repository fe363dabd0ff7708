//! RAM Speed Test
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│ Workload │───▶│  Access  │───▶│  Report  │
//! │  (YAML)  │    │ (2 × u32)│    │ (F/R/Rnd)│    │ (stdout) │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Flags: `--env/-e <name>`, `--seed <u32>`, `--isolated`, `--no-pause`.

use std::io::{IsTerminal, Read, Write};

use anyhow::Context;

use ram_speed_test::bench::runner::{BenchSettings, BenchmarkRunner, StreamMode};
use ram_speed_test::config::AppConfig;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Seed override from command line (--seed argument)
fn get_seed_override() -> Option<u32> {
    let args: Vec<String> = std::env::args().collect();
    seed_from_args(&args)
}

/// An unparsable value is ignored with a warning; the config seed applies.
fn seed_from_args(args: &[String]) -> Option<u32> {
    for i in 0..args.len() {
        if args[i] == "--seed" && i + 1 < args.len() {
            let value = &args[i + 1];
            return match value.parse() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    tracing::warn!(value = %value, error = %e, "ignoring invalid --seed");
                    None
                }
            };
        }
    }
    None
}

fn use_isolated_streams() -> bool {
    std::env::args().any(|a| a == "--isolated")
}

fn no_pause() -> bool {
    std::env::args().any(|a| a == "--no-pause")
}

/// Block for one byte of input, interactive terminals only.
fn wait_for_keypress() {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return;
    }
    let mut byte = [0u8; 1];
    let _ = stdin.lock().read(&mut byte);
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config =
        AppConfig::load(&env).with_context(|| format!("loading configuration for '{}'", env))?;
    let _log_guard = ram_speed_test::logging::init_logging(&app_config);

    let build_profile = env!("BUILD_PROFILE");
    tracing::info!(
        env = %env,
        git = env!("GIT_HASH"),
        profile = build_profile,
        "Starting RAM speed test"
    );
    if build_profile != "release" {
        tracing::warn!("Not a release build; timings are not representative");
    }

    let stream_mode = if use_isolated_streams() {
        StreamMode::Isolated
    } else {
        app_config.bench.stream_mode
    };
    let settings = BenchSettings {
        seed: get_seed_override().unwrap_or(app_config.bench.seed),
        stream_mode,
        ..BenchSettings::default()
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut runner = BenchmarkRunner::new(settings);
    let report = runner.run(&mut out).context("benchmark run failed")?;
    write!(out, "{}", report).context("writing report")?;
    out.flush()?;
    drop(out);

    if app_config.bench.pause_on_exit && !no_pause() {
        wait_for_keypress();
    }

    tracing::info!("RAM speed test finished");
    Ok(())
}
