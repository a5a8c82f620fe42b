//! Writes the default configuration files into a project directory.

use super::error::{InitError, InitResult};
use super::templates::{get_template, list_templates};
use crate::bootstrap::create_directories;
use crate::config::DEFAULT_CONFIG_PATH;
use crate::logging::Logger;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for initializing a summarizer project.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Project root where `config/config.yaml` and `params.yaml` are written.
    pub target_dir: PathBuf,

    /// Overwrite existing configuration files.
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
        }
    }
}

/// Generate the default project configuration.
///
/// This function creates the following structure:
/// ```text
/// <target_dir>/
/// ├── config/
/// │   └── config.yaml
/// └── params.yaml
/// ```
///
/// # Returns
/// The written file paths, sorted, or an `InitError` if:
/// - `config/config.yaml` already exists (without force flag)
/// - A template file cannot be found
/// - File system operations fail
///
/// # Example
/// ```no_run
/// use summ_core::init::{generate_project_structure, InitOptions};
/// use summ_core::logging::TracingLogger;
/// use std::path::PathBuf;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = InitOptions {
///     target_dir: PathBuf::from("."),
///     force: false,
/// };
///
/// generate_project_structure(&options, &TracingLogger)?;
/// # Ok(())
/// # }
/// ```
pub fn generate_project_structure(
    options: &InitOptions,
    logger: &dyn Logger,
) -> InitResult<Vec<PathBuf>> {
    let config_path = options.target_dir.join(DEFAULT_CONFIG_PATH);

    if config_path.exists() && !options.force {
        return Err(InitError::FileExists(config_path));
    }

    list_templates("")
        .iter()
        .map(|template_path| write_template_file(&options.target_dir, template_path, logger))
        .collect()
}

fn write_template_file(
    target_dir: &Path,
    template_path: &str,
    logger: &dyn Logger,
) -> InitResult<PathBuf> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    let target_path = target_dir.join(template_path);

    if let Some(parent) = target_path.parent() {
        create_directories(&[parent], false, logger).map_err(|source| {
            InitError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            }
        })?;
    }

    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path.clone(),
        source,
    })?;

    logger.info(&format!("Wrote {}", target_path.display()));
    Ok(target_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{read_yaml, DEFAULT_PARAMS_PATH};
    use crate::logging::RecordingLogger;
    use tempfile::tempdir;

    #[test]
    fn test_generate_structure_success() {
        let dir = tempdir().expect("Failed to create temp dir");
        let options = InitOptions {
            target_dir: dir.path().to_path_buf(),
            force: false,
        };
        let logger = RecordingLogger::default();

        let written =
            generate_project_structure(&options, &logger).expect("Failed to generate structure");

        assert_eq!(
            written,
            vec![
                dir.path().join(DEFAULT_CONFIG_PATH),
                dir.path().join(DEFAULT_PARAMS_PATH)
            ]
        );
        let config = read_yaml(dir.path().join(DEFAULT_CONFIG_PATH), &logger)
            .expect("Generated config should load");
        assert!(config.contains_key("data_ingestion"));
        assert!(dir.path().join(DEFAULT_PARAMS_PATH).is_file());
    }

    #[test]
    fn test_generate_structure_exists_without_force() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("config")).expect("Failed to create config dir");
        fs::write(dir.path().join(DEFAULT_CONFIG_PATH), "artifacts_root: mine\n")
            .expect("Failed to write config");

        let options = InitOptions {
            target_dir: dir.path().to_path_buf(),
            force: false,
        };

        let result = generate_project_structure(&options, &RecordingLogger::default());
        assert!(
            matches!(result, Err(InitError::FileExists(_))),
            "Should return FileExists error"
        );

        let kept = fs::read_to_string(dir.path().join(DEFAULT_CONFIG_PATH))
            .expect("Failed to read config");
        assert_eq!(kept, "artifacts_root: mine\n", "Existing config must be untouched");
    }

    #[test]
    fn test_generate_structure_exists_with_force() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("config")).expect("Failed to create config dir");
        fs::write(dir.path().join(DEFAULT_CONFIG_PATH), "artifacts_root: mine\n")
            .expect("Failed to write config");

        let options = InitOptions {
            target_dir: dir.path().to_path_buf(),
            force: true,
        };

        generate_project_structure(&options, &RecordingLogger::default())
            .expect("Should succeed with force flag");

        let replaced = fs::read_to_string(dir.path().join(DEFAULT_CONFIG_PATH))
            .expect("Failed to read config");
        assert!(replaced.contains("data_transformation:"));
    }

    #[test]
    fn test_default_init_options() {
        let options = InitOptions::default();
        assert!(!options.force, "Default force should be false");
        assert!(
            options.target_dir.is_absolute() || options.target_dir == PathBuf::from("."),
            "Default target_dir should be current directory"
        );
    }
}
