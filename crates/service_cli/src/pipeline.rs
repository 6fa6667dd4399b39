//! Pipeline orchestration
//!
//! Runs one conversion: read the source document, decode and normalise its
//! records, sort them by value and write the JSON output.

use std::path::{Path, PathBuf};

use adapter_xml::RatesXmlParser;
use infra_config::PipelineConfig;
use rates_core::{sort_by_value_desc, Record};
use tracing::{debug, info, warn};

use crate::emitter;
use crate::error::{PipelineError, Result};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Number of records written
    pub records: usize,
    /// Destination path
    pub output: PathBuf,
    /// Size of the output in bytes
    pub bytes_written: usize,
}

/// Load the configuration file and apply environment overrides.
///
/// Empty paths are reported with a warning; they fail later when the
/// files are opened.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let config = PipelineConfig::load(path)?.with_env_override();

    for key in config.missing_fields() {
        warn!(config = %path.display(), key, "Configuration key is missing or empty");
    }

    Ok(config)
}

/// Read and decode the records of a source document, in document order.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let bytes = std::fs::read(path).map_err(|source| PipelineError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), size = bytes.len(), "Input file read");

    let records = RatesXmlParser::parse(&bytes).map_err(|source| PipelineError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), records = records.len(), "Input document parsed");
    Ok(records)
}

/// Run the full conversion for `config`.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    let mut records = load_records(&config.input_file)?;

    sort_by_value_desc(&mut records);
    if let Some(top) = records.first() {
        debug!(symbol = %top.symbol, value = top.value, "Records sorted");
    }

    let summary = emitter::write_json(&records, &config.output_file)?;

    Ok(PipelineReport {
        records: records.len(),
        output: summary.path,
        bytes_written: summary.bytes_written,
    })
}
