use crate::Command;
use color_eyre::eyre::{eyre, WrapErr};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use summ_core::bootstrap::create_directories;
use summ_core::config::{read_yaml, ConfigurationManager};
use summ_core::init::{generate_project_structure, InitOptions};
use summ_core::logging::{Logger, TracingLogger};
use summ_protocol::{DataIngestionConfig, DataTransformationConfig};

/// JSON shape printed by `summarizer prepare`.
#[derive(Debug, Serialize)]
struct PreparedStages {
    data_ingestion: DataIngestionConfig,
    data_transformation: DataTransformationConfig,
}

pub fn run(command: Command) -> color_eyre::Result<()> {
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
    tracing::debug!(?command, "running command");

    match command {
        Command::Init { dir, force } => {
            let options = InitOptions {
                target_dir: dir,
                force,
            };
            init(options, logger.as_ref())
        }
        Command::Prepare { config, params } => prepare(&config, &params, logger),
        Command::Show { config, key } => show(&config, key.as_deref(), logger.as_ref()),
        Command::Mkdirs { paths, silent } => {
            let report = create_directories(&paths, !silent, logger.as_ref())?;
            for path in &report.created {
                println!("{} {}", "created".green(), path.display());
            }
            for path in &report.existing {
                println!("{} {}", "exists".yellow(), path.display());
            }
            Ok(())
        }
    }
}

fn init(options: InitOptions, logger: &dyn Logger) -> color_eyre::Result<()> {
    let written = generate_project_structure(&options, logger)?;
    for path in &written {
        println!("{} {}", "wrote".green(), path.display());
    }
    println!(
        "{}",
        "Project initialized. Edit config/config.yaml, then run `summarizer prepare`.".bold()
    );
    Ok(())
}

fn prepare(config: &Path, params: &Path, logger: Arc<dyn Logger>) -> color_eyre::Result<()> {
    let manager = ConfigurationManager::new(config, params, logger)
        .wrap_err_with(|| format!("Failed to load configuration from {}", config.display()))?;

    let stages = PreparedStages {
        data_ingestion: manager.data_ingestion_config()?,
        data_transformation: manager.data_transformation_config()?,
    };

    println!("{}", serde_json::to_string_pretty(&stages)?);
    Ok(())
}

fn show(config: &Path, key: Option<&str>, logger: &dyn Logger) -> color_eyre::Result<()> {
    let document = read_yaml(config, logger)?;

    let rendered = match key {
        None => serde_json::to_string_pretty(&document)?,
        Some(key) => {
            let value = document
                .lookup(key)
                .ok_or_else(|| eyre!("Key `{key}` not found in {}", config.display()))?;
            serde_json::to_string_pretty(value)?
        }
    };

    println!("{rendered}");
    Ok(())
}
