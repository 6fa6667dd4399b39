//! # infra_config
//!
//! Pipeline configuration for valcurs.
//!
//! Loads the input and output paths from a small YAML file, with
//! environment variable overrides layered on top.
//!
//! ## Architecture Position
//!
//! Part of the **I**nfra layer. Must not depend on adapter or service crates.
//!
//! ## Example
//!
//! ```rust,ignore
//! use infra_config::PipelineConfig;
//!
//! let config = PipelineConfig::load("config.yaml")?.with_env_override();
//! println!("Reading {}", config.input_file.display());
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{PipelineConfig, ENV_INPUT_FILE, ENV_OUTPUT_FILE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ConfigError, PipelineConfig};
}
