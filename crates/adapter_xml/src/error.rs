//! XML decoding errors.

use rates_core::ParseError;
use thiserror::Error;

/// Errors that can occur while decoding a rate document.
#[derive(Error, Debug)]
pub enum XmlError {
    /// Declared encoding label is not a known charset
    #[error("unknown document encoding '{label}'")]
    UnknownEncoding { label: String },

    /// Bytes are not valid in the resolved encoding
    #[error("document bytes are not valid {encoding}")]
    InvalidEncodedBytes { encoding: &'static str },

    /// Structurally invalid XML
    #[error("malformed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    /// Integer element text could not be parsed
    #[error("invalid integer in <{element}>: '{text}'")]
    InvalidInteger { element: &'static str, text: String },

    /// A record's value failed decimal normalisation
    #[error("invalid value in record {index} ('{symbol}')")]
    Value {
        index: usize,
        symbol: String,
        #[source]
        source: ParseError,
    },
}

impl XmlError {
    pub(crate) fn malformed(position: u64, message: impl Into<String>) -> Self {
        Self::Malformed {
            position,
            message: message.into(),
        }
    }

    /// Whether this error came from decimal normalisation rather than decoding.
    pub fn is_value_error(&self) -> bool {
        matches!(self, XmlError::Value { .. })
    }
}
