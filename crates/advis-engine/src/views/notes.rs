//! Notes context: a student summary plus their advising notes for a term.

use std::cmp::Reverse;

use advis_core::responses::{NoteEntry, NotesContextResponse, NotesStudentSummary};

use crate::error::EngineError;
use crate::service::AdvisService;
use crate::views::student::describe_note;

impl AdvisService {
    /// Notes for `student_id` in `term_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::StudentNotFound` for an unknown id, or
    /// `EngineError::Data` if a table fails to load.
    pub async fn notes_context(
        &self,
        student_id: u32,
        term_id: u32,
    ) -> Result<NotesContextResponse, EngineError> {
        tracing::debug!(student_id, term_id, "notes context");

        let scored = self.scored_student(student_id).await?;
        let all_notes = self.tables().advising_notes().await?;

        let mut notes: Vec<_> = all_notes
            .iter()
            .filter(|note| note.student_id == student_id && note.term_id == term_id)
            .collect();
        // Stable sort keeps table order for notes on the same day.
        notes.sort_by_key(|note| Reverse(note.note_date));

        Ok(NotesContextResponse {
            student: NotesStudentSummary {
                id: student_id,
                name: scored.student.name,
                major: scored.student.major,
                risk_tier: scored.risk.risk_tier,
                risk_score: scored.risk.risk_score,
                term_gpa: scored.student.cumulative_gpa,
                attendance: scored.attendance_pct,
            },
            term_id,
            notes: notes
                .into_iter()
                .map(|note| NoteEntry {
                    date: note.note_date,
                    kind: note.intervention_type.clone(),
                    description: describe_note(note),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use advis_core::enums::RiskTier;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::fixtures::test_service;

    #[tokio::test]
    async fn notes_are_scoped_to_the_term_and_newest_first() {
        let context = test_service().notes_context(1, 1).await.unwrap();
        let kinds: Vec<_> = context.notes.iter().map(|n| n.kind.as_str()).collect();
        assert_eq!(kinds, vec!["check_in", "tutoring_referral"]);
        assert_eq!(context.notes[0].date.to_string(), "2024-10-17");
        assert_eq!(context.notes[0].description, "check in on 2024-10-17");
        assert_eq!(context.term_id, 1);
    }

    #[tokio::test]
    async fn summary_matches_roster_risk() {
        let context = test_service().notes_context(2, 1).await.unwrap();
        assert_eq!(context.student.id, 2);
        assert_eq!(context.student.name, "Ben Carter");
        assert_eq!(context.student.risk_tier, RiskTier::High);
        assert_eq!(context.notes.len(), 1);
    }

    #[tokio::test]
    async fn term_without_notes_is_empty() {
        let context = test_service().notes_context(3, 2).await.unwrap();
        assert!(context.notes.is_empty());
    }

    #[tokio::test]
    async fn unknown_student_is_not_found() {
        let err = test_service().notes_context(77, 1).await.unwrap_err();
        assert!(matches!(err, EngineError::StudentNotFound(77)));
    }
}
