//! Charset sniffing and decoding for XML documents.
//!
//! Resolution order:
//! 1. Byte-order mark (UTF-8, UTF-16LE, UTF-16BE)
//! 2. Byte pattern of a BOM-less UTF-16 `<?` prefix
//! 3. `encoding="..."` in the XML declaration, looked up as a WHATWG label
//! 4. UTF-8
//!
//! Steps 1 and 2 use [`quick_xml::encoding::detect_encoding`]; step 3 reads
//! the declaration event with a raw `quick-xml` reader.
//!
//! Decoding never substitutes replacement characters: bytes that are invalid
//! in the resolved encoding are an error.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::XmlError;

/// How the document encoding was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingSource {
    /// Byte-order mark at the start of the document
    ByteOrderMark,
    /// UTF-16 byte pattern of `<?` without a BOM
    Sniffed,
    /// `encoding` pseudo-attribute of the XML declaration
    Declared,
    /// Nothing found; UTF-8 assumed
    Default,
}

/// Encoding resolved for a document.
#[derive(Debug, Clone, Copy)]
pub struct DetectedEncoding {
    /// The resolved encoding
    pub encoding: &'static Encoding,
    /// Where the encoding came from
    pub source: EncodingSource,
    /// Length of the byte-order mark to skip, zero if none
    pub bom_len: usize,
}

impl DetectedEncoding {
    fn new(encoding: &'static Encoding, source: EncodingSource, bom_len: usize) -> Self {
        Self {
            encoding,
            source,
            bom_len,
        }
    }
}

/// Resolve the character encoding of a document.
///
/// # Errors
///
/// - [`XmlError::UnknownEncoding`] if the declaration names a label that is
///   not a known encoding
/// - [`XmlError::Malformed`] if the XML declaration itself cannot be read
pub fn detect_encoding(bytes: &[u8]) -> Result<DetectedEncoding, XmlError> {
    match quick_xml::encoding::detect_encoding(bytes) {
        Some((encoding, bom_len)) if bom_len > 0 => Ok(DetectedEncoding::new(
            encoding,
            EncodingSource::ByteOrderMark,
            bom_len,
        )),
        // ASCII-compatible `<?xm` prefix: the declaration decides
        Some((encoding, _)) if encoding != UTF_8 => {
            Ok(DetectedEncoding::new(encoding, EncodingSource::Sniffed, 0))
        }
        Some(_) => match declared_encoding(bytes)? {
            Some(encoding) => Ok(DetectedEncoding::new(encoding, EncodingSource::Declared, 0)),
            None => Ok(DetectedEncoding::new(UTF_8, EncodingSource::Default, 0)),
        },
        None => Ok(DetectedEncoding::new(UTF_8, EncodingSource::Default, 0)),
    }
}

/// Decode a document to UTF-8 text using its detected encoding.
///
/// Borrows the input when it is already BOM-less UTF-8.
///
/// # Errors
///
/// - [`XmlError::UnknownEncoding`] or [`XmlError::Malformed`] from [`detect_encoding`]
/// - [`XmlError::InvalidEncodedBytes`] if the bytes are malformed for the encoding
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>, XmlError> {
    let detected = detect_encoding(bytes)?;
    tracing::debug!(
        encoding = detected.encoding.name(),
        source = ?detected.source,
        "resolved document encoding"
    );

    detected
        .encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[detected.bom_len..])
        .ok_or(XmlError::InvalidEncodedBytes {
            encoding: detected.encoding.name(),
        })
}

/// Look up the `encoding` label of a leading XML declaration.
///
/// Returns `None` when the first event is not a declaration (for example a
/// `<?xml-stylesheet ...?>` instruction) or the declaration has no label.
fn declared_encoding(bytes: &[u8]) -> Result<Option<&'static Encoding>, XmlError> {
    let mut reader = Reader::from_reader(bytes);
    let event = reader
        .read_event()
        .map_err(|e| XmlError::malformed(reader.error_position(), e.to_string()))?;

    let Event::Decl(decl) = event else {
        return Ok(None);
    };
    let label = match decl.encoding() {
        Some(label) => label.map_err(|e| XmlError::malformed(0, e.to_string()))?,
        None => return Ok(None),
    };

    Encoding::for_label(&label)
        .map(Some)
        .ok_or_else(|| XmlError::UnknownEncoding {
            label: String::from_utf8_lossy(&label).into_owned(),
        })
}
