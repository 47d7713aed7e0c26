//! Advisor dashboard: roster risk summary with filters and pagination.

use advis_core::enums::RiskTier;
use advis_core::responses::AdvisorDashboardResponse;

use crate::error::EngineError;
use crate::pagination::{PageRequest, paginate};
use crate::service::{AdvisService, ScoredStudent, mean, round_to};

/// Filter value that disables a filter.
pub const ALL_FILTER: &str = "all";

/// Parameters of the advisor dashboard.
///
/// `risk` and `major` are optional; `"all"` (any case) behaves like `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub risk: Option<String>,
    pub major: Option<String>,
}

impl RosterQuery {
    /// Parse the risk filter. `None` means no filter.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Core` for a value that is not a tier or `"all"`.
    pub fn risk_filter(&self) -> Result<Option<RiskTier>, EngineError> {
        match active_filter(self.risk.as_deref()) {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    }

    #[must_use]
    pub fn major_filter(&self) -> Option<&str> {
        active_filter(self.major.as_deref())
    }
}

fn active_filter(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL_FILTER))
}

impl AdvisService {
    /// Summary over every student plus one filtered page of roster rows.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if a table fails to load, the risk filter is not
    /// a known tier, or the page request is invalid.
    pub async fn advisor_dashboard(
        &self,
        query: &RosterQuery,
    ) -> Result<AdvisorDashboardResponse, EngineError> {
        let risk_filter = query.risk_filter()?;
        let major_filter = query.major_filter();
        let request = self.page_request(query.page, query.page_size).validate()?;
        tracing::debug!(?risk_filter, ?major_filter, ?request, "advisor dashboard");

        let roster = self.scored_roster().await?;

        let count_tier =
            |tier: RiskTier| count_u32(roster.iter().filter(|s| s.risk.risk_tier == tier));
        let high = count_tier(RiskTier::High);
        let medium = count_tier(RiskTier::Medium);
        let low = count_tier(RiskTier::Low);

        let average_term_gpa = mean(roster.iter().map(|s| s.student.cumulative_gpa))
            .map_or(0.0, |v| round_to(v, 2));
        let average_attendance =
            mean(roster.iter().map(|s| s.attendance_pct)).map_or(0.0, |v| round_to(v, 1));

        let filtered: Vec<_> = roster
            .iter()
            .filter(|s| risk_filter.is_none_or(|tier| s.risk.risk_tier == tier))
            .filter(|s| major_filter.is_none_or(|major| s.student.major == major))
            .map(ScoredStudent::to_row)
            .collect();
        let page = paginate(filtered, request)?;

        Ok(AdvisorDashboardResponse {
            total_students: count_u32(roster.iter()),
            high_risk_students: high,
            medium_risk_students: medium,
            low_risk_students: low,
            average_term_gpa,
            average_attendance,
            student_rows: page.rows,
            pagination: page.pagination,
        })
    }

    /// Fill in defaults for an optional page request.
    pub(crate) fn page_request(&self, page: Option<u32>, page_size: Option<u32>) -> PageRequest {
        PageRequest::new(
            page.unwrap_or(1),
            page_size.unwrap_or(self.settings().default_page_size),
        )
    }
}

pub(crate) fn count_u32<I: Iterator>(items: I) -> u32 {
    u32::try_from(items.count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use advis_core::enums::TableKind;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::fixtures::{approx, service_with, source, test_service};

    fn query(risk: Option<&str>, major: Option<&str>) -> RosterQuery {
        RosterQuery {
            page: Some(1),
            page_size: Some(50),
            risk: risk.map(String::from),
            major: major.map(String::from),
        }
    }

    fn ids(response: &AdvisorDashboardResponse) -> Vec<u32> {
        response.student_rows.iter().map(|r| r.student_id).collect()
    }

    #[tokio::test]
    async fn summary_counts_every_student() {
        let service = test_service();
        let response = service.advisor_dashboard(&query(None, None)).await.unwrap();

        assert_eq!(response.total_students, 4);
        assert_eq!(response.high_risk_students, 1);
        assert_eq!(response.medium_risk_students, 2);
        assert_eq!(response.low_risk_students, 1);
        assert!(approx(response.average_term_gpa, 2.45));
        assert!(approx(response.average_attendance, 57.5));
        assert_eq!(ids(&response), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn rows_carry_attendance_and_risk() {
        let service = test_service();
        let response = service.advisor_dashboard(&query(None, None)).await.unwrap();

        let ben = &response.student_rows[1];
        assert_eq!(ben.name, "Ben Carter");
        assert_eq!(ben.risk_tier, RiskTier::High);
        assert_eq!(ben.risk_score, 60);
        assert!(approx(ben.attendance_pct, 55.0));
        assert!(approx(ben.term_gpa, 1.2));

        let dev = &response.student_rows[3];
        assert!(approx(dev.attendance_pct, 0.0));
        assert_eq!(dev.risk_score, 58);
    }

    #[tokio::test]
    async fn filters_are_conjunctive() {
        let service = test_service();

        let high_biology = service
            .advisor_dashboard(&query(Some("high"), Some("Biology")))
            .await
            .unwrap();
        assert_eq!(ids(&high_biology), vec![2]);
        assert!(
            high_biology
                .student_rows
                .iter()
                .all(|r| r.risk_tier == RiskTier::High && r.major == "Biology")
        );

        let medium_biology = service
            .advisor_dashboard(&query(Some("MEDIUM"), Some("Biology")))
            .await
            .unwrap();
        assert_eq!(ids(&medium_biology), vec![3]);

        // Filters never change the summary.
        assert_eq!(medium_biology.total_students, 4);
        assert_eq!(medium_biology.pagination.total_filtered, 1);
    }

    #[tokio::test]
    async fn all_filters_return_the_unfiltered_roster() {
        let service = test_service();
        let all = service
            .advisor_dashboard(&query(Some("all"), Some("All")))
            .await
            .unwrap();
        let none = service.advisor_dashboard(&query(None, None)).await.unwrap();
        assert_eq!(all, none);
    }

    #[tokio::test]
    async fn major_filter_is_exact_match() {
        let service = test_service();
        let response = service
            .advisor_dashboard(&query(None, Some("biology")))
            .await
            .unwrap();
        assert!(response.student_rows.is_empty());
    }

    #[tokio::test]
    async fn unknown_risk_filter_is_invalid_input() {
        let service = test_service();
        let err = service
            .advisor_dashboard(&query(Some("severe"), None))
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("severe"));
    }

    #[tokio::test]
    async fn default_page_size_comes_from_settings() {
        let service = test_service();
        let response = service
            .advisor_dashboard(&RosterQuery::default())
            .await
            .unwrap();
        assert_eq!(ids(&response), vec![1, 2]);
        assert_eq!(response.pagination.page_size, 2);
        assert_eq!(response.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let service = test_service();
        let response = service
            .advisor_dashboard(&RosterQuery {
                page: Some(9),
                ..RosterQuery::default()
            })
            .await
            .unwrap();
        assert!(response.student_rows.is_empty());
        assert_eq!(response.pagination.current_page, 9);
        assert_eq!(response.pagination.total_filtered, 4);
    }

    #[tokio::test]
    async fn empty_roster_yields_zeros() {
        let service = service_with(source().with_table(
            TableKind::Students,
            "student_id,name,gender,age,residency_status,first_gen,major,cumulative_gpa,credits_completed\n",
        ));
        let response = service
            .advisor_dashboard(&RosterQuery::default())
            .await
            .unwrap();
        assert_eq!(response.total_students, 0);
        assert!(approx(response.average_term_gpa, 0.0));
        assert!(approx(response.average_attendance, 0.0));
        assert_eq!(response.pagination.total_pages, 0);
    }
}
