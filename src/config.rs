use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bench::runner::StreamMode;
use crate::core_types::{DEFAULT_SEED, Seed};
use crate::error::ConfigError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    #[serde(default)]
    pub bench: BenchConfig,
}

/// Benchmark knobs. Array size and iteration count are fixed constants and
/// intentionally absent here.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BenchConfig {
    #[serde(default = "default_seed")]
    pub seed: Seed,
    #[serde(default)]
    pub stream_mode: StreamMode,
    /// Wait for a keypress before exiting (interactive terminals only)
    #[serde(default = "default_pause")]
    pub pause_on_exit: bool,
}

fn default_seed() -> Seed {
    DEFAULT_SEED
}

fn default_pause() -> bool {
    true
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            stream_mode: StreamMode::Shared,
            pause_on_exit: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "ram_speed_test.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
            bench: BenchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `config/<env>.yaml`, falling back to defaults when the file does
    /// not exist. A file that exists but fails to read or parse is an error.
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let config_path = format!("config/{}.yaml", env);
        if !Path::new(&config_path).exists() {
            tracing::debug!(path = %config_path, "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&config_path)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
