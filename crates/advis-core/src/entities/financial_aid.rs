use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Financial aid snapshot. At most one row per student.
///
/// Every figure is optional: a blank cell loads as `None` and reaches the
/// dashboard as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FinancialAidRecord {
    pub student_id: u32,
    #[serde(default)]
    pub household_income_usd: Option<f64>,
    /// Stored as `0`/`1` in the snapshot.
    #[serde(default)]
    pub scholarship_flag: Option<u8>,
    #[serde(default)]
    pub aid_amount_usd: Option<f64>,
    #[serde(default)]
    pub work_hours_per_week: Option<f64>,
    #[serde(default)]
    pub outstanding_balance_usd: Option<f64>,
}
