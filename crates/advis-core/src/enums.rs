//! Risk tiers and table identifiers for Advis.
//!
//! `RiskTier` serializes with its capitalised name (`"High"`, `"Medium"`,
//! `"Low"`) because dashboards render it verbatim. `TableKind` uses
//! `snake_case` like every other identifier that ends up in a file name or URL.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RiskTier
// ---------------------------------------------------------------------------

/// Categorical risk bucket derived from a risk score.
///
/// ```text
/// score >= 60  → High
/// score >= 30  → Medium
/// otherwise    → Low
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    /// All tiers, highest risk first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = CoreError;

    /// Case-insensitive parse (`"high"`, `"HIGH"` and `"High"` are equal).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown risk tier '{raw}' (expected high, medium, or low)"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// TableKind
// ---------------------------------------------------------------------------

/// The nine snapshot tables the loader knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Students,
    Attendance,
    Courses,
    Enrollments,
    EnrollmentGrades,
    FinancialAid,
    LmsEvents,
    TermGpas,
    AdvisingNotes,
}

impl TableKind {
    /// Every table, in preload order.
    pub const ALL: [Self; 9] = [
        Self::Students,
        Self::Attendance,
        Self::Courses,
        Self::Enrollments,
        Self::EnrollmentGrades,
        Self::FinancialAid,
        Self::LmsEvents,
        Self::TermGpas,
        Self::AdvisingNotes,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Attendance => "attendance",
            Self::Courses => "courses",
            Self::Enrollments => "enrollments",
            Self::EnrollmentGrades => "enrollment_grades",
            Self::FinancialAid => "financial_aid",
            Self::LmsEvents => "lms_events",
            Self::TermGpas => "term_gpas",
            Self::AdvisingNotes => "advising_notes",
        }
    }

    /// File name used when the table is read from a snapshot directory.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Students => "students.csv",
            Self::Attendance => "attendance.csv",
            Self::Courses => "courses.csv",
            Self::Enrollments => "enrollments.csv",
            Self::EnrollmentGrades => "enrollment_grades.csv",
            Self::FinancialAid => "financial_aid.csv",
            Self::LmsEvents => "lms_events.csv",
            Self::TermGpas => "term_gpas.csv",
            Self::AdvisingNotes => "advising_notes.csv",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = CoreError;

    /// Accepts the `snake_case` name or a hyphenated alias (`lms-events`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|table| table.as_str() == normalized)
            .ok_or_else(|| CoreError::Validation(format!("unknown table '{raw}'")))
    }
}
