//! # rates_core: Exchange-Rate Record Model
//!
//! Bottom layer of the valcurs workspace, providing:
//! - The record types (`record`): [`RawRecord`] as read from the source
//!   document and the normalised [`Record`] written to the output
//! - Locale-aware decimal parsing (`normalize`): comma-separated decimals to `f64`
//! - Ordering (`sort`): stable descending sort by value
//! - Error types (`error`): [`ParseError`]
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other workspace crates and performs no
//! I/O. Everything here is a pure transform and can be tested in isolation.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rates_core::{normalize_value, sort_by_value_desc, RawRecord};
//!
//! assert_eq!(normalize_value("75,4148").unwrap(), 75.4148);
//!
//! let mut records = vec![
//!     RawRecord::new(840, "USD", "75,4148").normalize().unwrap(),
//!     RawRecord::new(978, "EUR", "90,1936").normalize().unwrap(),
//! ];
//! sort_by_value_desc(&mut records);
//! assert_eq!(records[0].symbol, "EUR");
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod normalize;
pub mod record;
pub mod sort;

pub use error::ParseError;
pub use normalize::normalize_value;
pub use record::{RawRecord, Record};
pub use sort::{is_sorted_desc, sort_by_value_desc};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        is_sorted_desc, normalize_value, sort_by_value_desc, ParseError, RawRecord, Record,
    };
}
