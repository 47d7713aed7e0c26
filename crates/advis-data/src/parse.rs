//! Header-driven CSV parsing into typed records.

use advis_core::enums::TableKind;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;

use crate::error::DataError;

/// Parse one table blob into typed rows.
///
/// The first line is the header; each following line is one row. Blank
/// (including whitespace-only) lines are skipped. Values are trimmed and
/// mapped onto `T` by header name, so column order in the blob is free.
///
/// # Errors
///
/// Returns `DataError::Parse` when the header row is missing, a row has a
/// different number of columns than the header, or a value does not fit
/// the typed field (e.g. `"abc"` for a GPA).
pub fn parse_table<T: DeserializeOwned>(table: TableKind, text: &str) -> Result<Vec<T>, DataError> {
    let (headers, records) = read_records(table, text)?;

    records
        .iter()
        .map(|(line, record)| {
            record
                .deserialize::<T>(Some(&headers))
                .map_err(|e| parse_error(table, *line, e.to_string()))
        })
        .collect()
}

/// Read the header and every non-blank record with its 1-based line number.
pub(crate) fn read_records(
    table: TableKind,
    text: &str,
) -> Result<(StringRecord, Vec<(u64, StringRecord)>), DataError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(parse_error(table, 1, String::from("missing header row")));
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| parse_error(table, 1, e.to_string()))?
        .clone();
    if headers.iter().any(str::is_empty) {
        return Err(parse_error(table, 1, String::from("empty column name in header")));
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, csv::Position::line);
            parse_error(table, line, e.to_string())
        })?;
        let line = record.position().map_or(0, csv::Position::line);

        if is_blank(&record) {
            continue;
        }
        if record.len() != headers.len() {
            return Err(parse_error(
                table,
                line,
                format!(
                    "expected {} columns, found {}",
                    headers.len(),
                    record.len()
                ),
            ));
        }
        records.push((line, record));
    }

    Ok((headers, records))
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(str::is_empty)
}

fn parse_error(table: TableKind, line: u64, message: String) -> DataError {
    DataError::Parse {
        table,
        line,
        message,
    }
}
