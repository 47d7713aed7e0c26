use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// GPA earned by a student in a single term.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TermGpaRecord {
    pub student_id: u32,
    pub term_id: u32,
    pub term_gpa: f64,
}
