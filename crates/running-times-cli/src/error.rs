use running_times_config::ConfigError;
use running_times_core::BenchError;
use thiserror::Error;

/// Fatal errors; the process exits with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bench(#[from] BenchError),
}
