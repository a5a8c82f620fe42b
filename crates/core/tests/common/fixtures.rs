//! Test fixtures for creating sample projects and configuration files.

use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to `name` inside `dir` and return the full path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Create a temporary project with `config/config.yaml` and `params.yaml`.
///
/// All artifact paths point inside the returned directory, so the directories
/// created by the configuration manager are cleaned up with it.
#[allow(dead_code)]
pub fn create_test_project() -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path().display().to_string();

    let config_yaml = format!(
        r#"artifacts_root: {root}/artifacts

data_ingestion:
  root_dir: {root}/artifacts/data_ingestion
  source_URL: https://example.com/summarizer-data.zip
  local_data_file: {root}/artifacts/data_ingestion/data.zip
  unzip_dir: {root}/artifacts/data_ingestion

data_transformation:
  root_dir: {root}/artifacts/data_transformation
  data_path: {root}/artifacts/data_ingestion/samsum_dataset
  tokenizer_name: google/pegasus-cnn_dailymail
"#
    );
    std::fs::create_dir_all(temp_dir.path().join("config"))?;
    std::fs::write(temp_dir.path().join("config/config.yaml"), config_yaml)?;

    let params_yaml = r#"TrainingArguments:
  num_train_epochs: 1
  warmup_steps: 500
  weight_decay: 0.01
"#;
    std::fs::write(temp_dir.path().join("params.yaml"), params_yaml)?;

    Ok(temp_dir)
}
