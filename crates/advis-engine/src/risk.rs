//! Risk Assessment Function.
//!
//! Combines cumulative GPA and attendance into a 0-100 score:
//!
//! ```text
//! gpa_risk        = ((4 - gpa) / 4) * 100 * 0.6
//! attendance_risk = ((100 - attendance) / 100) * 100 * 0.4
//! score           = round(gpa_risk + attendance_risk)
//! ```
//!
//! Both inputs are clamped into their contract range first, so the score can
//! never leave `0..=100`. A `NaN` input counts as the worst case.

use advis_core::enums::RiskTier;
use advis_core::responses::RiskAssessment;

/// Scores at or above this are `High`.
pub const HIGH_RISK_THRESHOLD: u8 = 60;

/// Scores at or above this (and below [`HIGH_RISK_THRESHOLD`]) are `Medium`.
pub const MEDIUM_RISK_THRESHOLD: u8 = 30;

pub const MAX_GPA: f64 = 4.0;
pub const MAX_ATTENDANCE: f64 = 100.0;

const GPA_WEIGHT: f64 = 0.6;
const ATTENDANCE_WEIGHT: f64 = 0.4;

/// Score and tier for one student.
#[must_use]
pub fn calculate_risk(gpa: f64, attendance_pct: f64) -> RiskAssessment {
    let gpa = clamp_or_worst(gpa, MAX_GPA);
    let attendance = clamp_or_worst(attendance_pct, MAX_ATTENDANCE);

    let gpa_risk = ((MAX_GPA - gpa) / MAX_GPA) * 100.0 * GPA_WEIGHT;
    let attendance_risk =
        ((MAX_ATTENDANCE - attendance) / MAX_ATTENDANCE) * 100.0 * ATTENDANCE_WEIGHT;

    // Components are each bounded, so the sum stays inside 0..=100.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let risk_score = (gpa_risk + attendance_risk).round().clamp(0.0, 100.0) as u8;

    RiskAssessment {
        risk_score,
        risk_tier: tier_for_score(risk_score),
    }
}

/// Map a score onto its tier.
#[must_use]
pub const fn tier_for_score(score: u8) -> RiskTier {
    if score >= HIGH_RISK_THRESHOLD {
        RiskTier::High
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

fn clamp_or_worst(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}
