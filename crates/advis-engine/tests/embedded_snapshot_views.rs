//! End-to-end views over the embedded sample snapshot.

use std::sync::Arc;

use advis_core::enums::RiskTier;
use advis_data::TableRepository;
use advis_engine::{AdvisService, EngineError, EngineSettings, RosterQuery, SearchQuery};
use pretty_assertions::assert_eq;

fn service(term_id: u32) -> AdvisService {
    AdvisService::new(
        Arc::new(TableRepository::embedded()),
        EngineSettings {
            term_id,
            default_page_size: 5,
        },
    )
}

#[tokio::test]
async fn dashboard_summary_is_consistent_with_rows() {
    let service = service(1);
    let all = service
        .advisor_dashboard(&RosterQuery {
            page_size: Some(100),
            ..RosterQuery::default()
        })
        .await
        .unwrap();

    assert_eq!(all.total_students, 12);
    assert_eq!(
        all.high_risk_students + all.medium_risk_students + all.low_risk_students,
        12
    );
    for tier in RiskTier::ALL {
        let in_rows = all
            .student_rows
            .iter()
            .filter(|r| r.risk_tier == tier)
            .count();
        let summary = match tier {
            RiskTier::High => all.high_risk_students,
            RiskTier::Medium => all.medium_risk_students,
            RiskTier::Low => all.low_risk_students,
        };
        assert_eq!(in_rows, summary as usize, "{tier}");
    }
}

#[tokio::test]
async fn pages_reassemble_the_filtered_roster() {
    let service = service(1);
    let first = service.advisor_dashboard(&RosterQuery::default()).await.unwrap();
    assert_eq!(first.pagination.total_pages, 3);

    let mut ids = Vec::new();
    for page in 1..=first.pagination.total_pages {
        let response = service
            .advisor_dashboard(&RosterQuery {
                page: Some(page),
                ..RosterQuery::default()
            })
            .await
            .unwrap();
        ids.extend(response.student_rows.iter().map(|r| r.student_id));
    }
    assert_eq!(ids, (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn search_finds_majors_across_students() {
    let response = service(1)
        .search_students(&SearchQuery::new("computer"))
        .await
        .unwrap();
    let ids: Vec<_> = response.student_rows.iter().map(|r| r.student_id).collect();
    assert_eq!(ids, vec![1, 7, 12]);
}

#[tokio::test]
async fn missing_grade_row_renders_not_available() {
    let dashboard = service(1).student_dashboard(4).await.unwrap();
    let art = dashboard
        .courses
        .iter()
        .find(|c| c.course_id == 601)
        .unwrap();
    assert_eq!(art.course_name, "Survey of Western Art");
    assert_eq!(art.credits, 3);
    assert_eq!(art.grade, "N/A");
    assert_eq!(art.numeric_grade, None);

    let writing = dashboard
        .courses
        .iter()
        .find(|c| c.course_id == 603)
        .unwrap();
    assert_eq!(writing.grade, "A-");
    assert_eq!(dashboard.current_term_gpa, Some(3.1));
}

#[tokio::test]
async fn configured_term_scopes_the_dashboard() {
    let dashboard = service(2).student_dashboard(4).await.unwrap();
    assert_eq!(dashboard.term_id, 2);
    let ids: Vec<_> = dashboard.courses.iter().map(|c| c.course_id).collect();
    assert_eq!(ids, vec![603, 401]);
    assert_eq!(dashboard.current_term_gpa, Some(3.59));
}

#[tokio::test]
async fn student_without_aid_has_null_financials() {
    let dashboard = service(1).student_dashboard(7).await.unwrap();
    let json = serde_json::to_value(&dashboard.financial_aid).unwrap();
    for key in [
        "householdIncomeUsd",
        "scholarship",
        "aidAmountUsd",
        "workHoursPerWeek",
        "outstandingBalanceUsd",
    ] {
        assert!(json[key].is_null(), "{key} should be null");
    }
}

#[tokio::test]
async fn report_buckets_every_term_gpa_row() {
    let report = service(1).risk_report().await.unwrap();
    let bucketed: u32 = report.gpa_distribution.iter().map(|b| b.count).sum();
    assert_eq!(bucketed, 24);

    let share: f64 = report.risk_distribution.iter().map(|t| t.percentage).sum();
    assert!((share - 100.0).abs() <= 0.2, "shares add up to {share}");
}

#[tokio::test]
async fn unknown_student_is_not_found_everywhere() {
    let service = service(1);
    assert!(matches!(
        service.student_dashboard(99).await,
        Err(EngineError::StudentNotFound(99))
    ));
    assert!(service.student_profile(99).await.unwrap_err().is_not_found());
    assert!(service.notes_context(99, 1).await.unwrap_err().is_not_found());
}
