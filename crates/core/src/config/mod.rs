//! Configuration loading and management.
//!
//! This module reads YAML configuration files into dot-accessible
//! [`ConfigBox`] trees and turns their sections into stage records.

pub mod error;
pub mod loader;
pub mod manager;
pub mod value;

pub use error::{ConfigError, ConfigResult};
pub use loader::read_yaml;
pub use manager::{ConfigurationManager, DEFAULT_CONFIG_PATH, DEFAULT_PARAMS_PATH};
pub use value::{ConfigBox, ConfigValue};
