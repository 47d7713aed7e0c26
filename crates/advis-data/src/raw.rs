//! Untyped view of a table with number/text inference.

use advis_core::enums::TableKind;
use serde::Serialize;

use crate::error::DataError;
use crate::parse::read_records;

/// A single inferred cell. Serializes as a bare JSON number, string, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// A value that parses as a finite number becomes `Number`; an empty value
    /// becomes `Empty`; anything else stays `Text`.
    #[must_use]
    pub fn infer(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value),
            _ => Self::Text(raw.to_string()),
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::Empty => None,
        }
    }
}

/// Header plus inferred rows of one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawTable {
    pub table: TableKind,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Parse `text` with the same structural rules as [`crate::parse_table`].
    ///
    /// # Errors
    ///
    /// Returns `DataError::Parse` for a missing header or a row whose column
    /// count differs from the header.
    pub fn parse(table: TableKind, text: &str) -> Result<Self, DataError> {
        let (headers, records) = read_records(table, text)?;
        let rows = records
            .iter()
            .map(|(_, record)| record.iter().map(Cell::infer).collect())
            .collect();
        Ok(Self {
            table,
            headers: headers.iter().map(str::to_string).collect(),
            rows,
        })
    }

    /// Index of a column by header name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
