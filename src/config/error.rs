//! Configuration errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value that the service cannot start with.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} is not set")]
    MissingRequired(&'static str),

    #[error("port must not be 0")]
    InvalidPort,

    #[error("cannot listen on '{0}'")]
    InvalidListenAddress(String),

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("database URL must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("pool max must be positive and not below min, got min {min} and max {max}")]
    InvalidPoolSize { min: u32, max: u32 },
}
