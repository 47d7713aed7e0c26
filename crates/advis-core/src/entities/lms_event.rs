use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Weekly learning-platform activity for a student in a term.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LmsEventRecord {
    pub student_id: u32,
    pub term_id: u32,
    pub week_number: u32,
    pub logins: u32,
    pub time_on_platform_min: f64,
    pub assignments_submitted: u32,
}
