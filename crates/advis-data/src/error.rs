//! Loader error types for advis-data.

use std::path::PathBuf;

use advis_core::enums::TableKind;
use thiserror::Error;

/// Errors from reading or parsing a snapshot table.
#[derive(Debug, Error)]
pub enum DataError {
    /// The source has no blob for this table. This is a configuration error.
    #[error("No source data for table '{0}'")]
    MissingTable(TableKind),

    /// The blob is structurally malformed.
    #[error("Failed to parse table '{table}' at line {line}: {message}")]
    Parse {
        table: TableKind,
        line: u64,
        message: String,
    },

    /// The blob exists but could not be read.
    #[error("Failed to read table '{table}' from {}: {source}", path.display())]
    Io {
        table: TableKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DataError {
    /// The table this error refers to.
    #[must_use]
    pub const fn table(&self) -> TableKind {
        match self {
            Self::MissingTable(table) | Self::Parse { table, .. } | Self::Io { table, .. } => {
                *table
            }
        }
    }
}
