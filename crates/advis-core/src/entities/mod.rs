//! Record structs for the nine Advis snapshot tables.
//!
//! Field names match the CSV headers exactly; the loader maps columns by
//! header name through serde. Records are immutable once loaded.

mod advising_note;
mod attendance;
mod course;
mod enrollment;
mod financial_aid;
mod lms_event;
mod student;
mod term_gpa;

pub use advising_note::AdvisingNoteRecord;
pub use attendance::AttendanceRecord;
pub use course::CourseRecord;
pub use enrollment::{EnrollmentGradeRecord, EnrollmentRecord};
pub use financial_aid::FinancialAidRecord;
pub use lms_event::LmsEventRecord;
pub use student::StudentRecord;
pub use term_gpa::TermGpaRecord;
