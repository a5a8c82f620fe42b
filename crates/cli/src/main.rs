mod commands;
mod telemetry;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use summ_core::config::{DEFAULT_CONFIG_PATH, DEFAULT_PARAMS_PATH};

/// Configuration and filesystem bootstrap for the summarization pipeline.
#[derive(Debug, Parser)]
#[command(name = "summarizer", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory for `running_logs.log`.
    #[arg(long, global = true, default_value = "logs")]
    pub log_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the default config/config.yaml and params.yaml.
    Init {
        /// Project root to initialize.
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing configuration.
        #[arg(long)]
        force: bool,
    },

    /// Resolve the stage configurations, creating their directories.
    Prepare {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        #[arg(long, default_value = DEFAULT_PARAMS_PATH)]
        params: PathBuf,
    },

    /// Print a YAML file, or one dotted key of it, as JSON.
    Show {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Dotted key such as `data_ingestion.root_dir`.
        #[arg(long)]
        key: Option<String>,
    },

    /// Create directories (and missing parents).
    Mkdirs {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Do not log each directory.
        #[arg(long)]
        silent: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Flushes the log file when dropped.
    let _guard = telemetry::init(&cli)?;

    commands::run(cli.command)
}
