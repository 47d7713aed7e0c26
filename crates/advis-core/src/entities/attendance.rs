use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Attendance for one course in one month of a term.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AttendanceRecord {
    pub student_id: u32,
    pub term_id: u32,
    pub course_id: u32,
    pub month: String,
    /// 0–100.
    pub attendance_pct: f64,
}
