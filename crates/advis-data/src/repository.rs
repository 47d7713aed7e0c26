//! Load-once, read-many access to the snapshot tables.
//!
//! Each table sits behind its own `OnceCell`. The first accessor call reads
//! the blob from the [`TableSource`] and parses it; every later call returns
//! a clone of the same `Arc`. Concurrent first calls wait on the single
//! in-flight parse. A failed parse leaves the cell empty, so the error is
//! returned to that caller and the next call tries again.

use std::sync::Arc;
use std::time::Instant;

use advis_core::entities::{
    AdvisingNoteRecord, AttendanceRecord, CourseRecord, EnrollmentGradeRecord, EnrollmentRecord,
    FinancialAidRecord, LmsEventRecord, StudentRecord, TermGpaRecord,
};
use advis_core::enums::TableKind;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use crate::error::DataError;
use crate::parse::parse_table;
use crate::raw::RawTable;
use crate::source::{EmbeddedSource, TableSource};

/// Shared, immutable rows of one table.
pub type Rows<T> = Arc<Vec<T>>;

pub struct TableRepository {
    source: Box<dyn TableSource>,
    students: OnceCell<Rows<StudentRecord>>,
    attendance: OnceCell<Rows<AttendanceRecord>>,
    courses: OnceCell<Rows<CourseRecord>>,
    enrollments: OnceCell<Rows<EnrollmentRecord>>,
    enrollment_grades: OnceCell<Rows<EnrollmentGradeRecord>>,
    financial_aid: OnceCell<Rows<FinancialAidRecord>>,
    lms_events: OnceCell<Rows<LmsEventRecord>>,
    term_gpas: OnceCell<Rows<TermGpaRecord>>,
    advising_notes: OnceCell<Rows<AdvisingNoteRecord>>,
}

impl TableRepository {
    pub fn new(source: impl TableSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            students: OnceCell::new(),
            attendance: OnceCell::new(),
            courses: OnceCell::new(),
            enrollments: OnceCell::new(),
            enrollment_grades: OnceCell::new(),
            financial_aid: OnceCell::new(),
            lms_events: OnceCell::new(),
            term_gpas: OnceCell::new(),
            advising_notes: OnceCell::new(),
        }
    }

    /// Repository over the snapshot compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    #[must_use]
    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    async fn load<T: DeserializeOwned>(
        &self,
        cell: &OnceCell<Rows<T>>,
        table: TableKind,
    ) -> Result<Rows<T>, DataError> {
        cell.get_or_try_init(|| async {
            let text = self.source.read(table)?;
            let rows = parse_table::<T>(table, &text)?;
            tracing::debug!(%table, rows = rows.len(), "parsed table");
            Ok(Arc::new(rows))
        })
        .await
        .cloned()
    }

    pub async fn students(&self) -> Result<Rows<StudentRecord>, DataError> {
        self.load(&self.students, TableKind::Students).await
    }

    pub async fn attendance(&self) -> Result<Rows<AttendanceRecord>, DataError> {
        self.load(&self.attendance, TableKind::Attendance).await
    }

    pub async fn courses(&self) -> Result<Rows<CourseRecord>, DataError> {
        self.load(&self.courses, TableKind::Courses).await
    }

    pub async fn enrollments(&self) -> Result<Rows<EnrollmentRecord>, DataError> {
        self.load(&self.enrollments, TableKind::Enrollments).await
    }

    pub async fn enrollment_grades(&self) -> Result<Rows<EnrollmentGradeRecord>, DataError> {
        self.load(&self.enrollment_grades, TableKind::EnrollmentGrades)
            .await
    }

    pub async fn financial_aid(&self) -> Result<Rows<FinancialAidRecord>, DataError> {
        self.load(&self.financial_aid, TableKind::FinancialAid).await
    }

    pub async fn lms_events(&self) -> Result<Rows<LmsEventRecord>, DataError> {
        self.load(&self.lms_events, TableKind::LmsEvents).await
    }

    pub async fn term_gpas(&self) -> Result<Rows<TermGpaRecord>, DataError> {
        self.load(&self.term_gpas, TableKind::TermGpas).await
    }

    pub async fn advising_notes(&self) -> Result<Rows<AdvisingNoteRecord>, DataError> {
        self.load(&self.advising_notes, TableKind::AdvisingNotes)
            .await
    }

    /// Load every table concurrently. Stops at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first `DataError` raised by any table.
    pub async fn preload(&self) -> Result<(), DataError> {
        let started = Instant::now();
        tokio::try_join!(
            self.students(),
            self.attendance(),
            self.courses(),
            self.enrollments(),
            self.enrollment_grades(),
            self.financial_aid(),
            self.lms_events(),
            self.term_gpas(),
            self.advising_notes(),
        )?;
        tracing::info!(
            source = %self.source.describe(),
            elapsed_ms = started.elapsed().as_millis(),
            "preloaded all tables"
        );
        Ok(())
    }

    #[must_use]
    pub fn is_loaded(&self, table: TableKind) -> bool {
        self.row_count(table).is_some()
    }

    /// Row count of a table that has already been loaded.
    #[must_use]
    pub fn row_count(&self, table: TableKind) -> Option<usize> {
        match table {
            TableKind::Students => self.students.get().map(|rows| rows.len()),
            TableKind::Attendance => self.attendance.get().map(|rows| rows.len()),
            TableKind::Courses => self.courses.get().map(|rows| rows.len()),
            TableKind::Enrollments => self.enrollments.get().map(|rows| rows.len()),
            TableKind::EnrollmentGrades => self.enrollment_grades.get().map(|rows| rows.len()),
            TableKind::FinancialAid => self.financial_aid.get().map(|rows| rows.len()),
            TableKind::LmsEvents => self.lms_events.get().map(|rows| rows.len()),
            TableKind::TermGpas => self.term_gpas.get().map(|rows| rows.len()),
            TableKind::AdvisingNotes => self.advising_notes.get().map(|rows| rows.len()),
        }
    }

    /// Untyped view of a table, read fresh from the source (not cached).
    ///
    /// # Errors
    ///
    /// Returns `DataError` if the source cannot supply the table or it is
    /// malformed.
    pub fn raw_table(&self, table: TableKind) -> Result<RawTable, DataError> {
        let text = self.source.read(table)?;
        RawTable::parse(table, &text)
    }
}

impl std::fmt::Debug for TableRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableRepository")
            .field("source", &self.source.describe())
            .finish_non_exhaustive()
    }
}
