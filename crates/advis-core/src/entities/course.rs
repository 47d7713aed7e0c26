use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A course in the catalog. Credits are not stored; see
/// `advis_engine::grades::derive_credits`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseRecord {
    pub course_id: u32,
    pub dept: String,
    /// Catalog level, e.g. `230`.
    pub level: u32,
    pub title: String,
}
