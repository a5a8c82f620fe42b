//! Configuration records for the ingestion and transformation stages.
//!
//! Both records deserialize from the matching sections of `config/config.yaml`:
//!
//! ```yaml
//! data_ingestion:
//!   root_dir: artifacts/data_ingestion
//!   source_URL: https://example.com/data.zip
//!   local_data_file: artifacts/data_ingestion/data.zip
//!   unzip_dir: artifacts/data_ingestion
//!
//! data_transformation:
//!   root_dir: artifacts/data_transformation
//!   data_path: artifacts/data_ingestion/samsum_dataset
//!   tokenizer_name: google/pegasus-cnn_dailymail
//! ```

use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Inputs for the data ingestion stage.
///
/// Every field is required at construction and there are no setters, so a
/// value never changes after it is built. Use [`DataIngestionConfig::new`] or
/// deserialize it from a config section.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DataIngestionConfig {
    root_dir: PathBuf,

    #[serde(rename = "source_URL")]
    source_url: String,

    local_data_file: PathBuf,

    unzip_dir: PathBuf,
}

impl DataIngestionConfig {
    pub fn new(
        root_dir: impl Into<PathBuf>,
        source_url: impl Into<String>,
        local_data_file: impl Into<PathBuf>,
        unzip_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            source_url: source_url.into(),
            local_data_file: local_data_file.into(),
            unzip_dir: unzip_dir.into(),
        }
    }

    /// Working directory of the ingestion stage.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Remote location of the source archive.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Where the downloaded archive is stored.
    pub fn local_data_file(&self) -> &Path {
        &self.local_data_file
    }

    /// Where the archive is extracted.
    pub fn unzip_dir(&self) -> &Path {
        &self.unzip_dir
    }
}

/// Inputs for the data transformation stage.
///
/// Unlike [`DataIngestionConfig`], fields are public and may be reassigned;
/// clones are independent values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DataTransformationConfig {
    /// Working directory of the transformation stage.
    pub root_dir: PathBuf,

    /// Location of the ingested dataset.
    pub data_path: PathBuf,

    /// Tokenizer identifier (hub name or local path).
    pub tokenizer_name: String,
}

impl DataTransformationConfig {
    pub fn new(
        root_dir: impl Into<PathBuf>,
        data_path: impl Into<PathBuf>,
        tokenizer_name: impl Into<String>,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            data_path: data_path.into(),
            tokenizer_name: tokenizer_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingestion_config_keeps_constructor_values() {
        let config = DataIngestionConfig::new(
            "artifacts/ingestion",
            "https://example.com/data.zip",
            "artifacts/ingestion/data.zip",
            "artifacts/ingestion/unzipped",
        );

        assert_eq!(config.root_dir(), Path::new("artifacts/ingestion"));
        assert_eq!(config.source_url(), "https://example.com/data.zip");
        assert_eq!(
            config.local_data_file(),
            Path::new("artifacts/ingestion/data.zip")
        );
        assert_eq!(config.unzip_dir(), Path::new("artifacts/ingestion/unzipped"));
    }

    #[test]
    fn test_transformation_config_reassignment_is_local() {
        let original = DataTransformationConfig::new(
            "artifacts/transformation",
            "artifacts/ingestion/samsum_dataset",
            "google/pegasus-cnn_dailymail",
        );
        let mut changed = original.clone();
        changed.tokenizer_name = "t5-small".to_string();
        changed.root_dir = PathBuf::from("elsewhere");

        assert_eq!(changed.tokenizer_name, "t5-small");
        assert_eq!(changed.root_dir, PathBuf::from("elsewhere"));
        assert_eq!(original.tokenizer_name, "google/pegasus-cnn_dailymail");
        assert_eq!(original.root_dir, PathBuf::from("artifacts/transformation"));
        assert_ne!(original, changed);
    }
}
