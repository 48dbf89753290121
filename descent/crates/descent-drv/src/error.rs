//! Error handling module for the descent driver.
//!
//! Per-line scan, parse and evaluation failures are reported on the output
//! stream and never surface here. This type covers what can stop a session:
//! configuration problems and I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the descent driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A file the command needs to create already exists.
    #[error("File already exists: {} (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`Config`](crate::Config).
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
