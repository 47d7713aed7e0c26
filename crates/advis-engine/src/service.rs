//! Service layer joining the snapshot tables into view models.
//!
//! `AdvisService` wraps a shared `TableRepository` and the settings that
//! scope per-term views. Every view is implemented as an `impl AdvisService`
//! block in [`crate::views`].

use std::collections::HashMap;
use std::sync::Arc;

use advis_core::entities::{AttendanceRecord, StudentRecord};
use advis_core::responses::{RiskAssessment, StudentRow};
use advis_data::TableRepository;

use crate::error::EngineError;
use crate::pagination::MAX_PAGE_SIZE;
use crate::risk::calculate_risk;

/// Knobs that scope the per-student views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Term used by the student dashboard and profile course lists.
    pub term_id: u32,
    /// Page size used when a query does not specify one.
    pub default_page_size: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            term_id: 1,
            default_page_size: 10,
        }
    }
}

pub struct AdvisService {
    tables: Arc<TableRepository>,
    settings: EngineSettings,
}

impl AdvisService {
    #[must_use]
    pub fn new(tables: Arc<TableRepository>, settings: EngineSettings) -> Self {
        let settings = EngineSettings {
            default_page_size: settings.default_page_size.clamp(1, MAX_PAGE_SIZE),
            ..settings
        };
        Self { tables, settings }
    }

    /// Service over the embedded snapshot with default settings.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Arc::new(TableRepository::embedded()), EngineSettings::default())
    }

    #[must_use]
    pub const fn tables(&self) -> &Arc<TableRepository> {
        &self.tables
    }

    #[must_use]
    pub const fn settings(&self) -> EngineSettings {
        self.settings
    }

    /// Every student with attendance and risk computed, in table order.
    pub(crate) async fn scored_roster(&self) -> Result<Vec<ScoredStudent>, EngineError> {
        let (students, attendance) =
            tokio::try_join!(self.tables.students(), self.tables.attendance())?;
        let averages = attendance_by_student(&attendance);

        Ok(students
            .iter()
            .map(|student| ScoredStudent::score(student, &averages))
            .collect())
    }

    /// One student with attendance and risk computed.
    pub(crate) async fn scored_student(
        &self,
        student_id: u32,
    ) -> Result<ScoredStudent, EngineError> {
        let students = self.tables.students().await?;
        let student = students
            .iter()
            .find(|s| s.student_id == student_id)
            .ok_or(EngineError::StudentNotFound(student_id))?;
        let attendance = self.tables.attendance().await?;
        let averages = attendance_by_student(&attendance);
        Ok(ScoredStudent::score(student, &averages))
    }
}

/// A student joined with their overall attendance and risk.
#[derive(Debug, Clone)]
pub(crate) struct ScoredStudent {
    pub student: StudentRecord,
    pub attendance_pct: f64,
    pub risk: RiskAssessment,
}

impl ScoredStudent {
    fn score(student: &StudentRecord, averages: &HashMap<u32, f64>) -> Self {
        let attendance_pct = averages.get(&student.student_id).copied().unwrap_or(0.0);
        Self {
            risk: calculate_risk(student.cumulative_gpa, attendance_pct),
            attendance_pct,
            student: student.clone(),
        }
    }

    pub fn to_row(&self) -> StudentRow {
        StudentRow {
            student_id: self.student.student_id,
            name: self.student.name.clone(),
            major: self.student.major.clone(),
            risk_tier: self.risk.risk_tier,
            risk_score: self.risk.risk_score,
            term_gpa: self.student.cumulative_gpa,
            attendance_pct: self.attendance_pct,
        }
    }
}

/// Mean attendance per student across every term and course, one decimal.
pub(crate) fn attendance_by_student(rows: &[AttendanceRecord]) -> HashMap<u32, f64> {
    let mut sums: HashMap<u32, (f64, u32)> = HashMap::new();
    for row in rows {
        let entry = sums.entry(row.student_id).or_insert((0.0, 0));
        entry.0 += row.attendance_pct;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(id, (sum, count))| (id, round_to(sum / f64::from(count), 1)))
        .collect()
}

/// Arithmetic mean, or `None` for an empty input.
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_u32), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
