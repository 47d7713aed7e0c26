//! View-model response types returned as JSON by the engine.
//!
//! These structs define the shape of JSON output for `advis dashboard`,
//! `advis student`, `advis notes`, `advis report` and the matching HTTP
//! routes. Keys are camelCase to stay compatible with existing dashboard
//! front-ends.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RiskTier;

/// Risk score and tier computed from GPA and attendance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Integer in `0..=100`, higher means more risk.
    pub risk_score: u8,
    pub risk_tier: RiskTier,
}

/// Pagination metadata. `current_page` echoes the request even when it is
/// past the last page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: u32,
    pub total_filtered: u32,
    pub total_pages: u32,
}

/// One roster line on the advisor dashboard and the student search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentRow {
    pub student_id: u32,
    pub name: String,
    pub major: String,
    pub risk_tier: RiskTier,
    pub risk_score: u8,
    pub term_gpa: f64,
    pub attendance_pct: f64,
}

/// Response from `advis dashboard` / `GET /dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorDashboardResponse {
    pub total_students: u32,
    pub high_risk_students: u32,
    pub medium_risk_students: u32,
    pub low_risk_students: u32,
    pub average_term_gpa: f64,
    pub average_attendance: f64,
    pub student_rows: Vec<StudentRow>,
    pub pagination: Pagination,
}

/// Response from `advis students` / `GET /students`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentSearchResponse {
    pub query: String,
    pub student_rows: Vec<StudentRow>,
    pub pagination: Pagination,
}

/// A course the student is enrolled in for the dashboard term.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseEntry {
    pub course_id: u32,
    pub course_name: String,
    pub credits: u32,
    /// Letter grade, or `"N/A"` when no grade row exists.
    pub grade: String,
    pub numeric_grade: Option<f64>,
    pub course_gpa: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseAttendance {
    pub course_id: u32,
    pub course_name: String,
    pub percentage: f64,
}

/// Three parallel weekly series; index `i` of every vector belongs to `weeks[i]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LmsActivity {
    pub weeks: Vec<u32>,
    pub logins: Vec<u32>,
    pub hours_on_platform: Vec<f64>,
    pub assignments_submitted: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GpaTrendPoint {
    pub term_id: u32,
    pub gpa: f64,
}

/// Financial aid as shown to the student. Every field is `null` when the
/// student has no aid row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAidSummary {
    pub household_income_usd: Option<f64>,
    pub scholarship: Option<bool>,
    pub aid_amount_usd: Option<f64>,
    pub work_hours_per_week: Option<f64>,
    pub outstanding_balance_usd: Option<f64>,
}

/// Response from `advis student` / `GET /student/{id}/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboardResponse {
    pub student_id: u32,
    pub name: String,
    pub major: String,
    pub term_id: u32,
    pub cumulative_gpa: f64,
    pub current_term_gpa: Option<f64>,
    pub attendance_pct: f64,
    pub risk_score: u8,
    pub risk_tier: RiskTier,
    pub courses: Vec<CourseEntry>,
    pub attendance_by_course: Vec<CourseAttendance>,
    pub lms_activity: LmsActivity,
    pub gpa_trend: Vec<GpaTrendPoint>,
    pub financial_aid: FinancialAidSummary,
    /// Human-readable sentences, one per advising note.
    pub notes: Vec<String>,
}

/// Response from `advis profile` / `GET /student/{id}/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfileResponse {
    pub student_id: u32,
    pub name: String,
    pub major: String,
    pub risk_tier: RiskTier,
    pub risk_score: u8,
    pub term_gpa: f64,
    pub cumulative_gpa: f64,
    pub attendance_pct: f64,
    pub credits_completed: u32,
    pub age: u32,
    pub gender: String,
    pub residency_status: String,
    pub first_gen: bool,
    pub courses: Vec<CourseEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotesStudentSummary {
    pub id: u32,
    pub name: String,
    pub major: String,
    pub risk_tier: RiskTier,
    pub risk_score: u8,
    pub term_gpa: f64,
    pub attendance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NoteEntry {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Response from `advis notes` / `GET /notes/student/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotesContextResponse {
    pub student: NotesStudentSummary,
    pub term_id: u32,
    pub notes: Vec<NoteEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TierShare {
    pub tier: RiskTier,
    pub count: u32,
    /// Share of all students, one decimal.
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GpaBucket {
    pub range: String,
    pub count: u32,
}

/// Response from `advis report` / `GET /reports/risk`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskReportResponse {
    pub total_students: u32,
    pub risk_distribution: Vec<TierShare>,
    pub gpa_distribution: Vec<GpaBucket>,
}
