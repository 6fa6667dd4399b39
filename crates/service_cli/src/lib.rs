//! Conversion pipeline behind the `valcurs` command
//!
//! Reads a daily exchange-rate XML document, sorts its records by value
//! (highest first) and writes them as indented JSON.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate orchestrates the other
//! workspace crates:
//!
//! - `infra_config` supplies the input and output paths
//! - `adapter_xml` decodes the document into `rates_core::Record`s
//! - `rates_core` orders them
//! - [`emitter`] writes the result
//!
//! The binary owns flag parsing and logging setup; everything here takes an
//! explicit [`infra_config::PipelineConfig`] and can be driven from tests.

pub mod emitter;
pub mod error;
pub mod pipeline;

pub use error::{PipelineError, Result};
pub use pipeline::{load_config, load_records, run, PipelineReport};
