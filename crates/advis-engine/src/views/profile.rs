//! Advisor-facing student profile.

use advis_core::responses::StudentProfileResponse;

use crate::error::EngineError;
use crate::service::AdvisService;

impl AdvisService {
    /// Demographics, risk and the configured term's course list.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::StudentNotFound` for an unknown id, or
    /// `EngineError::Data` if a table fails to load.
    pub async fn student_profile(
        &self,
        student_id: u32,
    ) -> Result<StudentProfileResponse, EngineError> {
        let term_id = self.settings().term_id;
        tracing::debug!(student_id, term_id, "student profile");

        let scored = self.scored_student(student_id).await?;
        let courses = self.course_entries(student_id, term_id).await?;
        let student = scored.student;

        Ok(StudentProfileResponse {
            student_id,
            first_gen: student.is_first_gen(),
            name: student.name,
            major: student.major,
            risk_tier: scored.risk.risk_tier,
            risk_score: scored.risk.risk_score,
            term_gpa: student.cumulative_gpa,
            cumulative_gpa: student.cumulative_gpa,
            attendance_pct: scored.attendance_pct,
            credits_completed: student.credits_completed,
            age: student.age,
            gender: student.gender,
            residency_status: student.residency_status,
            courses,
        })
    }
}
