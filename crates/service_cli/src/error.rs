//! Pipeline error types

use std::path::PathBuf;

use adapter_xml::XmlError;
use infra_config::ConfigError;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors from any stage of a pipeline run.
///
/// Every variant is fatal; nothing is retried or skipped.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Configuration file unreadable or undecodable
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Source document unreadable
    #[error("failed to read input file {}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source document could not be decoded into records
    #[error("failed to decode input file {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: XmlError,
    },

    /// Output directory could not be created
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Records could not be serialised
    #[error("failed to serialise records as JSON")]
    Serialize(#[source] serde_json::Error),

    /// Output file could not be written
    #[error("failed to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Pipeline stage that failed, for log fields.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Config(_) => "config",
            PipelineError::InputRead { .. } => "read",
            PipelineError::Decode { source, .. } if source.is_value_error() => "parse",
            PipelineError::Decode { .. } => "decode",
            PipelineError::CreateDir { .. }
            | PipelineError::Serialize(_)
            | PipelineError::Write { .. } => "output",
        }
    }

    /// Whether a record value failed decimal normalisation.
    pub fn is_parse_error(&self) -> bool {
        self.stage() == "parse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rates_core::ParseError;

    #[test]
    fn test_stage_names() {
        let read = PipelineError::InputRead {
            path: PathBuf::from("in.xml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(read.stage(), "read");
        assert!(read.to_string().contains("in.xml"));

        let decode = PipelineError::Decode {
            path: PathBuf::from("in.xml"),
            source: XmlError::UnknownEncoding {
                label: "x".to_string(),
            },
        };
        assert_eq!(decode.stage(), "decode");
        assert!(!decode.is_parse_error());
    }

    #[test]
    fn test_value_failure_is_parse_stage() {
        let err = PipelineError::Decode {
            path: PathBuf::from("in.xml"),
            source: XmlError::Value {
                index: 0,
                symbol: "USD".to_string(),
                source: ParseError::InvalidDecimal {
                    input: "abc".to_string(),
                },
            },
        };
        assert_eq!(err.stage(), "parse");
        assert!(err.is_parse_error());
    }
}
