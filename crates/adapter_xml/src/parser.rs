//! Rate document parser implementation.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use rates_core::{normalize_value, RawRecord, Record};

use crate::charset::decode_document;
use crate::error::XmlError;

/// Element holding one currency entry, a direct child of the root.
const RECORD_TAG: &[u8] = b"Valute";

/// Depth of a record element when the root element is depth 1.
const RECORD_DEPTH: usize = 2;

/// Child elements of a record that carry data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    NumCode,
    CharCode,
    Value,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"NumCode" => Some(Field::NumCode),
            b"CharCode" => Some(Field::CharCode),
            b"Value" => Some(Field::Value),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Field::NumCode => "NumCode",
            Field::CharCode => "CharCode",
            Field::Value => "Value",
        }
    }
}

/// Parser for daily exchange-rate documents.
///
/// Reads every `Valute` element directly below the root element and
/// extracts its `NumCode`, `CharCode` and `Value` children. Other elements
/// and attributes are ignored. Absent children leave the field at its
/// default (`0`, `""`, and a value of `0.0`).
pub struct RatesXmlParser;

impl RatesXmlParser {
    /// Parse a document into normalised records, in document order.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The raw document, in any encoding it declares
    ///
    /// # Returns
    ///
    /// The records, or the first error encountered. No partial results are
    /// returned; a single malformed value fails the whole document.
    pub fn parse(bytes: &[u8]) -> Result<Vec<Record>, XmlError> {
        let raw = Self::parse_raw(bytes)?;

        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let symbol = raw.symbol.clone();
                raw.normalize().map_err(|source| XmlError::Value {
                    index,
                    symbol,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(records = records.len(), "normalised rate records");
        Ok(records)
    }

    /// Parse a document into records whose values are still source text.
    pub fn parse_raw(bytes: &[u8]) -> Result<Vec<RawRecord>, XmlError> {
        let text = decode_document(bytes)?;
        let mut reader = Reader::from_str(&text);

        let mut walker = Walker::default();
        loop {
            let event = reader
                .read_event()
                .map_err(|e| XmlError::malformed(reader.error_position() as u64, e.to_string()))?;
            let position = reader.buffer_position() as u64;

            match event {
                Event::Start(e) => walker.open(&e, position)?,
                Event::Empty(e) => {
                    walker.open(&e, position)?;
                    walker.close()?;
                }
                Event::Text(e) => {
                    if walker.collecting() {
                        let text = e
                            .unescape()
                            .map_err(|err| XmlError::malformed(position, err.to_string()))?;
                        walker.text.push_str(&text);
                    }
                }
                Event::CData(e) => {
                    if walker.collecting() {
                        let text = std::str::from_utf8(&e)
                            .map_err(|err| XmlError::malformed(position, err.to_string()))?;
                        walker.text.push_str(text);
                    }
                }
                Event::End(_) => walker.close()?,
                Event::Eof => break,
                _ => {}
            }
        }

        if walker.depth != 0 {
            return Err(XmlError::malformed(
                reader.buffer_position() as u64,
                "unexpected end of document inside an open element",
            ));
        }
        if !walker.saw_root {
            return Err(XmlError::malformed(0, "document has no root element"));
        }

        tracing::debug!(records = walker.records.len(), "parsed rate records");
        Ok(walker.records)
    }
}

/// Tracks position in the element tree while reading events.
#[derive(Debug, Default)]
struct Walker {
    depth: usize,
    saw_root: bool,
    current: Option<RawRecord>,
    field: Option<Field>,
    text: String,
    records: Vec<RawRecord>,
}

impl Walker {
    fn open(&mut self, element: &BytesStart<'_>, position: u64) -> Result<(), XmlError> {
        self.depth += 1;
        if self.depth == 1 {
            if self.saw_root {
                return Err(XmlError::malformed(
                    position,
                    "document has more than one root element",
                ));
            }
            self.saw_root = true;
        }

        let name = element.local_name();
        if self.depth == RECORD_DEPTH && name.as_ref() == RECORD_TAG {
            self.current = Some(RawRecord::default());
        } else if self.depth == RECORD_DEPTH + 1 && self.current.is_some() {
            self.field = Field::from_tag(name.as_ref());
            self.text.clear();
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), XmlError> {
        if self.depth == RECORD_DEPTH + 1 {
            if let (Some(field), Some(record)) = (self.field.take(), self.current.as_mut()) {
                apply_field(record, field, std::mem::take(&mut self.text))?;
            }
        } else if self.depth == RECORD_DEPTH {
            if let Some(record) = self.current.take() {
                self.records.push(record);
            }
        }
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    fn collecting(&self) -> bool {
        self.field.is_some() && self.depth == RECORD_DEPTH + 1
    }
}

fn apply_field(record: &mut RawRecord, field: Field, text: String) -> Result<(), XmlError> {
    match field {
        Field::NumCode => {
            let trimmed = text.trim();
            record.code = if trimmed.is_empty() {
                0
            } else {
                trimmed.parse().map_err(|_| XmlError::InvalidInteger {
                    element: field.name(),
                    text: text.clone(),
                })?
            };
        }
        Field::CharCode => record.symbol = text,
        Field::Value => {
            // A repeated element never masks an earlier invalid value
            let earlier_invalid = record
                .raw_value
                .as_deref()
                .is_some_and(|value| normalize_value(value).is_err());
            if !earlier_invalid {
                record.raw_value = Some(text);
            }
        }
    }
    Ok(())
}
