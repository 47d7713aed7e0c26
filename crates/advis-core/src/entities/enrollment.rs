use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Links a student to a course in a term.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrollmentRecord {
    pub enrollment_id: u32,
    pub student_id: u32,
    pub course_id: u32,
    pub term_id: u32,
}

/// Final grade of an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EnrollmentGradeRecord {
    pub enrollment_id: u32,
    pub student_id: u32,
    pub course_id: u32,
    pub term_id: u32,
    pub numeric_grade: f64,
    /// 0.0–4.0 scale.
    pub course_gpa: f64,
}
