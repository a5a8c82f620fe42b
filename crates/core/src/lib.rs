//! # summ-core
//!
//! Configuration loading and filesystem bootstrap for the summarization
//! pipeline.
//!
//! This crate provides:
//! - YAML loading into a dot-accessible configuration tree
//! - Directory creation for pipeline artifacts
//! - Stage configuration records built from `config/config.yaml`
//! - Project scaffolding with default configuration templates
//!
//! ## Modules
//!
//! - [`config`]: YAML loader, `ConfigBox`, configuration manager
//! - [`bootstrap`]: Directory bootstrapper
//! - [`init`]: Project initialization from embedded templates
//! - [`logging`]: Injected logging capability

pub mod bootstrap;
pub mod config;
pub mod init;
pub mod logging;

pub use summ_protocol::{DataIngestionConfig, DataTransformationConfig};
