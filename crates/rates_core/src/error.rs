//! Error types for record normalisation.

use thiserror::Error;

/// Errors raised while turning source text into record values.
///
/// # Examples
/// ```
/// use rates_core::ParseError;
///
/// let err = ParseError::InvalidDecimal { input: "1,2,3".to_string() };
/// assert_eq!(format!("{}", err), "invalid decimal value '1,2,3'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not a decimal numeral once commas are read as points.
    #[error("invalid decimal value '{input}'")]
    InvalidDecimal {
        /// Source text as it appeared in the document
        input: String,
    },

    /// The text parsed, but to an infinite or NaN value.
    #[error("decimal value '{input}' is not finite")]
    NonFinite {
        /// Source text as it appeared in the document
        input: String,
    },
}

impl ParseError {
    /// The offending source text.
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidDecimal { input } | ParseError::NonFinite { input } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::NonFinite {
            input: "1e400".to_string(),
        };
        assert!(err.to_string().contains("1e400"));
        assert!(err.to_string().contains("not finite"));
    }

    #[test]
    fn test_input_accessor() {
        let err = ParseError::InvalidDecimal {
            input: "abc".to_string(),
        };
        assert_eq!(err.input(), "abc");
    }
}
