//! Ordering of record sets.

use std::cmp::Ordering;

use crate::record::Record;

/// Sort records by value, highest first.
///
/// The sort is stable: records with equal values keep their input order,
/// so the same input always yields the same output. `-0.0` and `0.0` compare
/// equal.
pub fn sort_by_value_desc(records: &mut [Record]) {
    // Values are finite, so partial_cmp never returns None
    records.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
}

/// Whether every adjacent pair satisfies `a.value >= b.value`.
pub fn is_sorted_desc(records: &[Record]) -> bool {
    records.windows(2).all(|pair| pair[0].value >= pair[1].value)
}
