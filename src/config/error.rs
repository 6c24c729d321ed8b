//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid AI base URL")]
    InvalidBaseUrl,

    #[error("Classification timeout must be positive")]
    InvalidClassificationTimeout,

    #[error("Session TTL must be positive")]
    InvalidSessionTtl,

    #[error("Sweep interval must be positive")]
    InvalidSweepInterval,

    #[error("Admin token must be at least {0} characters")]
    AdminTokenTooShort(usize),
}
