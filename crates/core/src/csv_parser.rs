//! Shared plumbing for the typed CSV feed parsers.
//!
//! Feeds are read with a header row, every following row is mapped to a
//! record or dropped. Only failures of the reader itself are reported.

use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use rust_decimal::Decimal;

use crate::Result;

/// Turns a raw CSV payload into typed records.
///
/// Object safe so parsers can be injected as `Arc<dyn CsvParser<T>>`.
pub trait CsvParser<T>: Send + Sync {
    fn parse(&self, content: &[u8]) -> Result<Vec<T>>;
}

/// Strips a UTF-8 byte order mark if present.
fn strip_bom(content: &[u8]) -> &[u8] {
    content.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(content)
}

/// Reads all data rows of `content`, keeping those `map_row` accepts.
///
/// Source order is preserved.
pub(crate) fn read_rows<T, F>(content: &[u8], feed: &str, mut map_row: F) -> Result<Vec<T>>
where
    F: FnMut(&StringRecord) -> Option<T>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(strip_bom(content));

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for record in reader.records() {
        match record {
            Ok(record) => match map_row(&record) {
                Some(row) => rows.push(row),
                None => dropped += 1,
            },
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                debug!("Unreadable {} row: {}", feed, e);
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        debug!(
            "Parsed {} {} rows, dropped {} malformed",
            rows.len(),
            feed,
            dropped
        );
    }

    Ok(rows)
}

/// Returns the field at `index`, or `None` when the row is too short.
pub(crate) fn field(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index)
}

/// Parses a decimal price, `None` when the text is not a number.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim()).ok()
}

/// Parses an integer volume, `None` when the text is not a whole number.
pub fn parse_volume(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok()
}
