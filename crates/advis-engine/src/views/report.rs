//! Cohort risk report: tier shares and the term-GPA distribution.

use advis_core::enums::RiskTier;
use advis_core::responses::{GpaBucket, RiskReportResponse, TierShare};

use crate::error::EngineError;
use crate::service::{AdvisService, round_to};
use crate::views::roster::count_u32;

/// Lower bounds of the GPA buckets, with their labels. A GPA belongs to the
/// last bucket whose lower bound it reaches; anything below the first bound
/// still lands in the first bucket.
const GPA_BUCKETS: [(f64, &str); 6] = [
    (0.0, "0.0-1.0"),
    (1.0, "1.0-2.0"),
    (2.0, "2.0-2.5"),
    (2.5, "2.5-3.0"),
    (3.0, "3.0-3.5"),
    (3.5, "3.5-4.0"),
];

impl AdvisService {
    /// # Errors
    ///
    /// Returns `EngineError::Data` if a table fails to load.
    pub async fn risk_report(&self) -> Result<RiskReportResponse, EngineError> {
        tracing::debug!("risk report");

        let roster = self.scored_roster().await?;
        let total = count_u32(roster.iter());

        let risk_distribution = RiskTier::ALL
            .into_iter()
            .map(|tier| {
                let count = count_u32(roster.iter().filter(|s| s.risk.risk_tier == tier));
                let percentage = if total == 0 {
                    0.0
                } else {
                    round_to(f64::from(count) * 100.0 / f64::from(total), 1)
                };
                TierShare {
                    tier,
                    count,
                    percentage,
                }
            })
            .collect();

        let mut counts = [0_u32; GPA_BUCKETS.len()];
        for row in self.tables().term_gpas().await?.iter() {
            counts[bucket_index(row.term_gpa)] += 1;
        }
        let gpa_distribution = GPA_BUCKETS
            .iter()
            .zip(counts)
            .map(|((_, label), count)| GpaBucket {
                range: (*label).to_string(),
                count,
            })
            .collect();

        Ok(RiskReportResponse {
            total_students: total,
            risk_distribution,
            gpa_distribution,
        })
    }
}

fn bucket_index(gpa: f64) -> usize {
    GPA_BUCKETS
        .iter()
        .rposition(|(lower, _)| gpa >= *lower)
        .unwrap_or(0)
}
