//! # summ-protocol
//!
//! Stage configuration records for the summarization pipeline.
//!
//! These are plain value holders: they are built by a caller from parsed
//! configuration and handed to the pipeline stage that consumes them. They
//! own no resources and carry no behavior.
//!
//! ## Modules
//!
//! - [`stage_models`]: `DataIngestionConfig` and `DataTransformationConfig`

pub mod stage_models;

pub use stage_models::*;
