use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An advising intervention logged against a student.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AdvisingNoteRecord {
    pub note_id: u32,
    pub student_id: u32,
    pub term_id: u32,
    /// `snake_case` label such as `advising_meeting` or `tutoring_referral`.
    pub intervention_type: String,
    pub note_date: NaiveDate,
}

impl AdvisingNoteRecord {
    /// Intervention type with underscores replaced by spaces.
    #[must_use]
    pub fn intervention_label(&self) -> String {
        self.intervention_type.replace('_', " ")
    }
}
