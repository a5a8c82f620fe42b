//! Builds stage configuration records from `config.yaml` and `params.yaml`.

use crate::bootstrap::create_directories;
use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::loader::read_yaml;
use crate::config::value::ConfigBox;
use crate::logging::Logger;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use summ_protocol::DataIngestionConfig;
use summ_protocol::DataTransformationConfig;

/// Default location of the pipeline configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Default location of the training parameters file.
pub const DEFAULT_PARAMS_PATH: &str = "params.yaml";

const ARTIFACTS_ROOT_KEY: &str = "artifacts_root";
const DATA_INGESTION_KEY: &str = "data_ingestion";
const DATA_TRANSFORMATION_KEY: &str = "data_transformation";

/// Loads the pipeline configuration once and hands out per-stage records.
///
/// Construction reads both YAML files and creates `artifacts_root`. Each
/// stage accessor also creates that stage's `root_dir` before returning.
pub struct ConfigurationManager {
    config: ConfigBox,
    params: ConfigBox,
    logger: Arc<dyn Logger>,
}

impl ConfigurationManager {
    /// # Errors
    ///
    /// Any [`read_yaml`] error for either file, `MissingKey` when
    /// `artifacts_root` is absent, `InvalidDocument` when it is not a string,
    /// or `Io` when the directory cannot be created.
    pub fn new(
        config_path: impl AsRef<Path>,
        params_path: impl AsRef<Path>,
        logger: Arc<dyn Logger>,
    ) -> ConfigResult<Self> {
        let config_path = config_path.as_ref();
        let config = read_yaml(config_path, logger.as_ref())?;
        let params = read_yaml(params_path, logger.as_ref())?;

        let artifacts_root = match config.get(ARTIFACTS_ROOT_KEY) {
            None => {
                return Err(ConfigError::MissingKey {
                    key: ARTIFACTS_ROOT_KEY.to_string(),
                })
            }
            Some(value) => value.as_str().map(PathBuf::from).ok_or_else(|| {
                ConfigError::InvalidDocument {
                    path: config_path.to_path_buf(),
                    reason: format!("`{ARTIFACTS_ROOT_KEY}` must be a string"),
                }
            })?,
        };

        create_directories(&[artifacts_root], true, logger.as_ref())?;

        Ok(Self {
            config,
            params,
            logger,
        })
    }

    /// Loads from [`DEFAULT_CONFIG_PATH`] and [`DEFAULT_PARAMS_PATH`] under `root`.
    pub fn from_project_root(root: &Path, logger: Arc<dyn Logger>) -> ConfigResult<Self> {
        Self::new(
            root.join(DEFAULT_CONFIG_PATH),
            root.join(DEFAULT_PARAMS_PATH),
            logger,
        )
    }

    pub fn config(&self) -> &ConfigBox {
        &self.config
    }

    pub fn params(&self) -> &ConfigBox {
        &self.params
    }

    /// Reads the `data_ingestion` section and creates its `root_dir`.
    pub fn data_ingestion_config(&self) -> ConfigResult<DataIngestionConfig> {
        let ingestion: DataIngestionConfig = self.config.section(DATA_INGESTION_KEY)?;
        create_directories(&[ingestion.root_dir()], true, self.logger.as_ref())?;
        Ok(ingestion)
    }

    /// Reads the `data_transformation` section and creates its `root_dir`.
    pub fn data_transformation_config(&self) -> ConfigResult<DataTransformationConfig> {
        let transformation: DataTransformationConfig =
            self.config.section(DATA_TRANSFORMATION_KEY)?;
        create_directories(&[&transformation.root_dir], true, self.logger.as_ref())?;
        Ok(transformation)
    }
}

impl std::fmt::Debug for ConfigurationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationManager")
            .field("config", &self.config)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
