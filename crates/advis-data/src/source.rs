//! Where table text comes from.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use advis_core::enums::TableKind;

use crate::error::DataError;

/// Supplies the complete text blob of a table.
///
/// A source that has no blob for a table returns `DataError::MissingTable`;
/// callers treat that as a configuration error, not something to retry.
pub trait TableSource: Send + Sync {
    /// Return the full text of `table`.
    ///
    /// # Errors
    ///
    /// Returns `DataError::MissingTable` when the source has no blob for the
    /// table, or `DataError::Io` when it exists but cannot be read.
    fn read(&self, table: TableKind) -> Result<Cow<'_, str>, DataError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

// ---------------------------------------------------------------------------
// DirectorySource
// ---------------------------------------------------------------------------

/// Reads `<dir>/<file name>` for each table.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    file_names: HashMap<TableKind, String>,
}

impl DirectorySource {
    /// Source rooted at `dir` using the default file names.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_names: HashMap::new(),
        }
    }

    /// Override the file name of one table.
    #[must_use]
    pub fn with_file_name(mut self, table: TableKind, file_name: impl Into<String>) -> Self {
        self.file_names.insert(table, file_name.into());
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path the table is read from.
    #[must_use]
    pub fn path_for(&self, table: TableKind) -> PathBuf {
        let file_name = self
            .file_names
            .get(&table)
            .map_or_else(|| table.default_file_name(), String::as_str);
        self.dir.join(file_name)
    }
}

impl TableSource for DirectorySource {
    fn read(&self, table: TableKind) -> Result<Cow<'_, str>, DataError> {
        let path = self.path_for(table);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Cow::Owned(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DataError::MissingTable(table)),
            Err(source) => Err(DataError::Io {
                table,
                path,
                source,
            }),
        }
    }

    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}

// ---------------------------------------------------------------------------
// InMemorySource
// ---------------------------------------------------------------------------

/// Blobs handed over at construction time.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    blobs: HashMap<TableKind, String>,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_table(mut self, table: TableKind, text: impl Into<String>) -> Self {
        self.insert(table, text);
        self
    }

    pub fn insert(&mut self, table: TableKind, text: impl Into<String>) {
        self.blobs.insert(table, text.into());
    }
}

impl TableSource for InMemorySource {
    fn read(&self, table: TableKind) -> Result<Cow<'_, str>, DataError> {
        self.blobs
            .get(&table)
            .map(|text| Cow::Borrowed(text.as_str()))
            .ok_or(DataError::MissingTable(table))
    }

    fn describe(&self) -> String {
        format!("in-memory ({} tables)", self.blobs.len())
    }
}

// ---------------------------------------------------------------------------
// EmbeddedSource
// ---------------------------------------------------------------------------

/// The sample snapshot compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    const fn text(table: TableKind) -> &'static str {
        match table {
            TableKind::Students => include_str!("../data/students.csv"),
            TableKind::Attendance => include_str!("../data/attendance.csv"),
            TableKind::Courses => include_str!("../data/courses.csv"),
            TableKind::Enrollments => include_str!("../data/enrollments.csv"),
            TableKind::EnrollmentGrades => include_str!("../data/enrollment_grades.csv"),
            TableKind::FinancialAid => include_str!("../data/financial_aid.csv"),
            TableKind::LmsEvents => include_str!("../data/lms_events.csv"),
            TableKind::TermGpas => include_str!("../data/term_gpas.csv"),
            TableKind::AdvisingNotes => include_str!("../data/advising_notes.csv"),
        }
    }
}

impl TableSource for EmbeddedSource {
    fn read(&self, table: TableKind) -> Result<Cow<'_, str>, DataError> {
        Ok(Cow::Borrowed(Self::text(table)))
    }

    fn describe(&self) -> String {
        String::from("embedded snapshot")
    }
}
