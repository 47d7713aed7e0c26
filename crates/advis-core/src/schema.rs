//! JSON Schema lookup for the Advis record and response types.
//!
//! Schemas are generated on demand with [`schemars::schema_for!`]; `names()`
//! lists every type that can be looked up.

use schemars::schema_for;
use serde_json::Value;

use crate::entities::{
    AdvisingNoteRecord, AttendanceRecord, CourseRecord, EnrollmentGradeRecord, EnrollmentRecord,
    FinancialAidRecord, LmsEventRecord, StudentRecord, TermGpaRecord,
};
use crate::errors::CoreError;
use crate::responses::{
    AdvisorDashboardResponse, NotesContextResponse, RiskAssessment, RiskReportResponse,
    StudentDashboardResponse, StudentProfileResponse, StudentSearchResponse,
};

const NAMES: &[&str] = &[
    "student_record",
    "attendance_record",
    "course_record",
    "enrollment_record",
    "enrollment_grade_record",
    "financial_aid_record",
    "lms_event_record",
    "term_gpa_record",
    "advising_note_record",
    "risk_assessment",
    "advisor_dashboard_response",
    "student_search_response",
    "student_dashboard_response",
    "student_profile_response",
    "notes_context_response",
    "risk_report_response",
];

macro_rules! schema_value {
    ($ty:ty) => {
        serde_json::to_value(schema_for!($ty))
    };
}

/// Every registered schema name.
#[must_use]
pub const fn names() -> &'static [&'static str] {
    NAMES
}

/// Generate the JSON Schema registered under `name`.
///
/// # Errors
///
/// Returns `CoreError::NotFound` for an unregistered name and
/// `CoreError::Validation` if the generated schema cannot be serialized.
pub fn schema_for_name(name: &str) -> Result<Value, CoreError> {
    let generated = match name {
        "student_record" => schema_value!(StudentRecord),
        "attendance_record" => schema_value!(AttendanceRecord),
        "course_record" => schema_value!(CourseRecord),
        "enrollment_record" => schema_value!(EnrollmentRecord),
        "enrollment_grade_record" => schema_value!(EnrollmentGradeRecord),
        "financial_aid_record" => schema_value!(FinancialAidRecord),
        "lms_event_record" => schema_value!(LmsEventRecord),
        "term_gpa_record" => schema_value!(TermGpaRecord),
        "advising_note_record" => schema_value!(AdvisingNoteRecord),
        "risk_assessment" => schema_value!(RiskAssessment),
        "advisor_dashboard_response" => schema_value!(AdvisorDashboardResponse),
        "student_search_response" => schema_value!(StudentSearchResponse),
        "student_dashboard_response" => schema_value!(StudentDashboardResponse),
        "student_profile_response" => schema_value!(StudentProfileResponse),
        "notes_context_response" => schema_value!(NotesContextResponse),
        "risk_report_response" => schema_value!(RiskReportResponse),
        other => {
            return Err(CoreError::NotFound {
                entity_type: String::from("schema"),
                id: other.to_string(),
            });
        }
    };
    generated.map_err(|e| CoreError::Validation(format!("schema '{name}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_name_resolves() {
        for name in names() {
            let schema = schema_for_name(name).unwrap();
            assert!(schema.is_object(), "{name} should produce an object schema");
        }
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = schema_for_name("session").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }
}
