//! Per-student dashboard at the configured term.

use std::collections::BTreeMap;

use advis_core::entities::{AdvisingNoteRecord, FinancialAidRecord};
use advis_core::responses::{
    CourseAttendance, CourseEntry, FinancialAidSummary, GpaTrendPoint, LmsActivity,
    StudentDashboardResponse,
};

use crate::error::EngineError;
use crate::grades::{
    NOT_AVAILABLE, UNKNOWN_COURSE_CREDITS, UNKNOWN_COURSE_TITLE, derive_credits, grade_to_letter,
};
use crate::service::{AdvisService, round_to};

impl AdvisService {
    /// Everything the student sees about themselves for the configured term.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::StudentNotFound` for an unknown id, or
    /// `EngineError::Data` if a table fails to load.
    pub async fn student_dashboard(
        &self,
        student_id: u32,
    ) -> Result<StudentDashboardResponse, EngineError> {
        let term_id = self.settings().term_id;
        tracing::debug!(student_id, term_id, "student dashboard");

        let scored = self.scored_student(student_id).await?;
        let courses = self.course_entries(student_id, term_id).await?;
        let attendance_by_course = self.attendance_by_course(student_id, term_id).await?;
        let lms_activity = self.lms_activity(student_id, term_id).await?;

        let term_gpas = self.tables().term_gpas().await?;
        let mut gpa_trend: Vec<GpaTrendPoint> = term_gpas
            .iter()
            .filter(|row| row.student_id == student_id)
            .map(|row| GpaTrendPoint {
                term_id: row.term_id,
                gpa: row.term_gpa,
            })
            .collect();
        gpa_trend.sort_by_key(|point| point.term_id);
        let current_term_gpa = gpa_trend
            .iter()
            .find(|point| point.term_id == term_id)
            .map(|point| point.gpa);

        let aid = self.tables().financial_aid().await?;
        let financial_aid = aid
            .iter()
            .find(|row| row.student_id == student_id)
            .map_or_else(FinancialAidSummary::default, summarize_aid);

        let notes = self
            .tables()
            .advising_notes()
            .await?
            .iter()
            .filter(|note| note.student_id == student_id)
            .map(describe_note)
            .collect();

        Ok(StudentDashboardResponse {
            student_id,
            name: scored.student.name,
            major: scored.student.major,
            term_id,
            cumulative_gpa: scored.student.cumulative_gpa,
            current_term_gpa,
            attendance_pct: scored.attendance_pct,
            risk_score: scored.risk.risk_score,
            risk_tier: scored.risk.risk_tier,
            courses,
            attendance_by_course,
            lms_activity,
            gpa_trend,
            financial_aid,
            notes,
        })
    }

    /// Enrollments at `term_id` joined with course and grade rows.
    pub(crate) async fn course_entries(
        &self,
        student_id: u32,
        term_id: u32,
    ) -> Result<Vec<CourseEntry>, EngineError> {
        let enrollments = self.tables().enrollments().await?;
        let courses = self.tables().courses().await?;
        let grades = self.tables().enrollment_grades().await?;

        Ok(enrollments
            .iter()
            .filter(|e| e.student_id == student_id && e.term_id == term_id)
            .map(|enrollment| {
                let course = courses.iter().find(|c| c.course_id == enrollment.course_id);
                let grade = grades.iter().find(|g| {
                    g.student_id == student_id
                        && g.course_id == enrollment.course_id
                        && g.term_id == term_id
                });
                CourseEntry {
                    course_id: enrollment.course_id,
                    course_name: course
                        .map_or_else(|| UNKNOWN_COURSE_TITLE.to_string(), |c| c.title.clone()),
                    credits: course.map_or(UNKNOWN_COURSE_CREDITS, |c| derive_credits(c.level)),
                    grade: grade.map_or_else(
                        || NOT_AVAILABLE.to_string(),
                        |g| grade_to_letter(g.course_gpa).to_string(),
                    ),
                    numeric_grade: grade.map(|g| g.numeric_grade),
                    course_gpa: grade.map(|g| g.course_gpa),
                }
            })
            .collect())
    }

    /// Attendance at `term_id` averaged per course, in first-seen order.
    async fn attendance_by_course(
        &self,
        student_id: u32,
        term_id: u32,
    ) -> Result<Vec<CourseAttendance>, EngineError> {
        let attendance = self.tables().attendance().await?;
        let courses = self.tables().courses().await?;

        let mut per_course: Vec<(u32, f64, u32)> = Vec::new();
        for row in attendance
            .iter()
            .filter(|a| a.student_id == student_id && a.term_id == term_id)
        {
            match per_course.iter_mut().find(|(id, _, _)| *id == row.course_id) {
                Some((_, sum, count)) => {
                    *sum += row.attendance_pct;
                    *count += 1;
                }
                None => per_course.push((row.course_id, row.attendance_pct, 1)),
            }
        }

        Ok(per_course
            .into_iter()
            .map(|(course_id, sum, count)| CourseAttendance {
                course_id,
                course_name: courses
                    .iter()
                    .find(|c| c.course_id == course_id)
                    .map_or_else(|| UNKNOWN_COURSE_TITLE.to_string(), |c| c.title.clone()),
                percentage: round_to(sum / f64::from(count), 1),
            })
            .collect())
    }

    /// Weekly LMS series at `term_id`, weeks ascending, duplicate weeks summed.
    async fn lms_activity(
        &self,
        student_id: u32,
        term_id: u32,
    ) -> Result<LmsActivity, EngineError> {
        let events = self.tables().lms_events().await?;

        let mut weeks: BTreeMap<u32, (u32, f64, u32)> = BTreeMap::new();
        for event in events
            .iter()
            .filter(|e| e.student_id == student_id && e.term_id == term_id)
        {
            let week = weeks.entry(event.week_number).or_insert((0, 0.0, 0));
            week.0 += event.logins;
            week.1 += event.time_on_platform_min;
            week.2 += event.assignments_submitted;
        }

        let mut activity = LmsActivity::default();
        for (week, (logins, minutes, assignments)) in weeks {
            activity.weeks.push(week);
            activity.logins.push(logins);
            activity.hours_on_platform.push(round_to(minutes / 60.0, 1));
            activity.assignments_submitted.push(assignments);
        }
        Ok(activity)
    }
}

fn summarize_aid(row: &FinancialAidRecord) -> FinancialAidSummary {
    FinancialAidSummary {
        household_income_usd: row.household_income_usd,
        scholarship: row.scholarship_flag.map(|flag| flag != 0),
        aid_amount_usd: row.aid_amount_usd,
        work_hours_per_week: row.work_hours_per_week,
        outstanding_balance_usd: row.outstanding_balance_usd,
    }
}

/// `"tutoring referral on 2024-09-10"`.
pub(crate) fn describe_note(note: &AdvisingNoteRecord) -> String {
    format!(
        "{} on {}",
        note.intervention_label(),
        note.note_date.format("%Y-%m-%d")
    )
}
