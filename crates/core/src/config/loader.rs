//! YAML configuration file loader.
//!
//! This module reads a single YAML document from disk into a [`ConfigBox`].
//! The loader imposes no schema: any non-empty mapping is accepted. Typed
//! extraction happens later through [`ConfigBox::section`].

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::value::ConfigBox;
use crate::logging::Logger;
use serde_yaml::Value;
use std::path::Path;

/// Reads a YAML file and returns its contents as a dot-accessible [`ConfigBox`].
///
/// # Arguments
///
/// * `path` - Path of the YAML file to read
/// * `logger` - Receives one informational message once the file is loaded
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The path exists but is not a regular file (`NotAFile`)
/// - The file cannot be read (`Io`, the underlying error unchanged)
/// - The document is empty or only contains a null (`EmptyDocument`)
/// - The content is not valid YAML (`Yaml`, the parser error unchanged)
/// - The document root is not a mapping (`InvalidDocument`)
///
/// # Example
///
/// ```rust,no_run
/// use summ_core::config::loader::read_yaml;
/// use summ_core::logging::TracingLogger;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = read_yaml("config/config.yaml", &TracingLogger)?;
/// println!("artifacts go to {:?}", config["artifacts_root"].as_str());
/// # Ok(())
/// # }
/// ```
pub fn read_yaml<P: AsRef<Path>>(path: P, logger: &dyn Logger) -> ConfigResult<ConfigBox> {
    let path = path.as_ref();

    if path.exists() && !path.is_file() {
        return Err(ConfigError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if is_blank_document(&content) {
        return Err(ConfigError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }

    let value: Value = serde_yaml::from_str(&content)?;
    if value.is_null() {
        return Err(ConfigError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }

    let config = ConfigBox::try_from(value).map_err(|reason| ConfigError::InvalidDocument {
        path: path.to_path_buf(),
        reason,
    })?;

    logger.info(&format!("YAML file loaded successfully: {}", path.display()));
    Ok(config)
}

/// True when the text holds no YAML content at all: only blank lines,
/// comments and document markers.
fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
