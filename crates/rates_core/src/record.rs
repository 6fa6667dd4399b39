//! Exchange-rate records.
//!
//! Parsing is split in two steps. The XML adapter produces [`RawRecord`]s
//! whose value is still the locale-formatted source text; [`RawRecord::normalize`]
//! then turns each one into a [`Record`] with a numeric value.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::normalize::normalize_value;

/// One currency entry as it appears in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Numeric currency code (e.g. 840)
    pub code: i64,
    /// Character currency code, verbatim (e.g. "USD")
    pub symbol: String,
    /// Value text with `,` as decimal separator; `None` if the element was absent
    pub raw_value: Option<String>,
}

impl RawRecord {
    /// Create a raw record with a value text.
    pub fn new(code: i64, symbol: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            code,
            symbol: symbol.into(),
            raw_value: Some(raw_value.into()),
        }
    }

    /// Normalise the value text into a [`Record`].
    ///
    /// A record without a value element normalises to `0.0`.
    pub fn normalize(self) -> Result<Record, ParseError> {
        let value = match self.raw_value.as_deref() {
            Some(text) => normalize_value(text)?,
            None => 0.0,
        };

        Ok(Record {
            code: self.code,
            symbol: self.symbol,
            value,
        })
    }
}

/// One normalised currency entry.
///
/// Serialises as `{"num_code": .., "char_code": .., "value": ..}`.
///
/// # Examples
///
/// ```
/// use rates_core::Record;
///
/// let record = Record::new(840, "USD", 75.4148);
/// assert_eq!(record.symbol, "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Numeric currency code
    #[serde(rename = "num_code")]
    pub code: i64,
    /// Character currency code
    #[serde(rename = "char_code")]
    pub symbol: String,
    /// Exchange rate, always finite
    pub value: f64,
}

impl Record {
    /// Create a record from already-normalised parts.
    pub fn new(code: i64, symbol: impl Into<String>, value: f64) -> Self {
        Self {
            code,
            symbol: symbol.into(),
            value,
        }
    }
}
