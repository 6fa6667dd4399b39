//! # adapter_xml
//!
//! XML reader for daily exchange-rate documents.
//!
//! This crate turns the raw bytes of a `ValCurs`-style document into
//! [`rates_core::Record`]s. The source bytes are first decoded to UTF-8
//! according to their byte-order mark or declared encoding (`charset`),
//! then walked with `quick-xml` to pick out every `Valute` element (`parser`).
//!
//! ## Architecture Position
//!
//! Part of the **A**dapter layer. Depends on `rates_core` only and performs
//! no I/O: callers read the file and pass the bytes in.
//!
//! ## Example
//!
//! ```rust
//! use adapter_xml::RatesXmlParser;
//!
//! let xml = br#"<?xml version="1.0" encoding="windows-1251"?>
//! <ValCurs><Valute><NumCode>840</NumCode><CharCode>USD</CharCode><Value>75,4148</Value></Valute></ValCurs>"#;
//! let records = RatesXmlParser::parse(xml)?;
//! assert_eq!(records[0].value, 75.4148);
//! # Ok::<(), adapter_xml::XmlError>(())
//! ```

pub mod charset;
mod error;
mod parser;

pub use error::XmlError;
pub use parser::RatesXmlParser;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{RatesXmlParser, XmlError};
}
