//! Initialization module for new summarizer projects.
//!
//! Writes the default `config/config.yaml` and `params.yaml` into a project
//! directory from templates embedded at compile time.
//!
//! # Example
//!
//! ```no_run
//! use summ_core::init::{generate_project_structure, InitOptions};
//! use summ_core::logging::TracingLogger;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let written = generate_project_structure(&InitOptions::default(), &TracingLogger)?;
//! println!("Wrote {} files", written.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

// Re-export commonly used types for convenience
pub use error::{InitError, InitResult};
pub use generator::{generate_project_structure, InitOptions};
pub use templates::{get_template, list_templates};
