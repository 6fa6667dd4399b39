//! Decimal normalisation for comma-separated source values.
//!
//! Source documents format rates the way the publishing locale does, with
//! `,` as the fractional separator (`"75,4148"`). [`normalize_value`]
//! rewrites every comma as a point and parses the result as an `f64`.

use crate::error::ParseError;

/// Parse a comma-separated decimal into an `f64`.
///
/// Every `,` is replaced with `.` before standard float parsing, so a sign
/// and exponent are accepted. Surrounding whitespace is not trimmed.
///
/// # Errors
///
/// - [`ParseError::InvalidDecimal`] if the rewritten text is not a numeral
///   (`"abc"`, `"1,2,3"`, `""`)
/// - [`ParseError::NonFinite`] if it parses to infinity or NaN
///   (`"inf"`, `"1e400"`)
///
/// # Examples
///
/// ```
/// use rates_core::normalize_value;
///
/// assert_eq!(normalize_value("75,4148").unwrap(), 75.4148);
/// assert_eq!(normalize_value("-0,5").unwrap(), -0.5);
/// assert!(normalize_value("1,2,3").is_err());
/// ```
pub fn normalize_value(input: &str) -> Result<f64, ParseError> {
    let rewritten = input.replace(',', ".");

    let value: f64 = rewritten
        .parse()
        .map_err(|_| ParseError::InvalidDecimal {
            input: input.to_string(),
        })?;

    if !value.is_finite() {
        return Err(ParseError::NonFinite {
            input: input.to_string(),
        });
    }

    Ok(value)
}
