//! Error types for configuration loading.
//!
//! This module defines all errors that can occur while reading a YAML
//! configuration file and pulling typed sections out of it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document parsed to nothing (empty file, or only a null).
    #[error("YAML file is empty: {path}")]
    EmptyDocument { path: PathBuf },

    /// The document parsed, but cannot be represented as a [`ConfigBox`](super::ConfigBox).
    #[error("YAML file is invalid: {path}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    /// The path exists but is not a regular file.
    #[error("Not a file: {path}")]
    NotAFile { path: PathBuf },

    /// A requested key is not present in the loaded document.
    #[error("Missing configuration key: {key}")]
    MissingKey { key: String },

    /// Reading the file or creating a directory failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The YAML parser rejected the content, or a section had the wrong shape.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
