use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One student. `student_id` is the join key for every other table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentRecord {
    pub student_id: u32,
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub residency_status: String,
    /// Stored as `0`/`1` in the snapshot.
    pub first_gen: u8,
    pub major: String,
    /// 0.0–4.0 scale.
    pub cumulative_gpa: f64,
    pub credits_completed: u32,
}

impl StudentRecord {
    #[must_use]
    pub const fn is_first_gen(&self) -> bool {
        self.first_gen == 1
    }
}
