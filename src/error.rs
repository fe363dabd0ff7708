use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Workload size must be greater than zero")]
    EmptyWorkload,

    #[error("Workload sequences differ in length: first {first}, second {second}")]
    LengthMismatch { first: usize, second: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
