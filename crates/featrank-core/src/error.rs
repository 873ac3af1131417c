//! Error types for featrank-core

use featrank_io::IoError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main error type for report operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Table loading or column access failed
    #[error("Data error: {0}")]
    Io(#[from] IoError),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// No row in the users table carries this id
    #[error("User not found: {0}")]
    UserNotFound(i64),

    /// The weights table has no rows
    #[error("Weights table is empty")]
    EmptyWeights,

    /// Feature dimension outside 1..=15
    #[error("Invalid feature dimension: {0}")]
    InvalidFeature(usize),

    /// Linear blend weight outside [0, 1]
    #[error("Blend weight out of range: {0}")]
    InvalidBlendWeight(f64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
