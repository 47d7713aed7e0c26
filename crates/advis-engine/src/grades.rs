//! Letter grades and derived course credits.

/// Grade shown when an enrollment has no grade row.
pub const NOT_AVAILABLE: &str = "N/A";

/// Credits assumed for an enrollment whose course row is missing.
pub const UNKNOWN_COURSE_CREDITS: u32 = 3;

/// Title shown for an enrollment whose course row is missing.
pub const UNKNOWN_COURSE_TITLE: &str = "Unknown Course";

/// Cutoffs checked top-down; the first one the GPA reaches wins.
const LETTER_CUTOFFS: [(f64, &str); 10] = [
    (4.0, "A"),
    (3.7, "A-"),
    (3.3, "B+"),
    (3.0, "B"),
    (2.7, "B-"),
    (2.3, "C+"),
    (2.0, "C"),
    (1.7, "C-"),
    (1.3, "D+"),
    (1.0, "D"),
];

/// Convert a course GPA to a letter grade. Anything below 1.0 (including
/// negatives and `NaN`) is `F`.
#[must_use]
pub fn grade_to_letter(course_gpa: f64) -> &'static str {
    LETTER_CUTOFFS
        .iter()
        .find(|(cutoff, _)| course_gpa >= *cutoff)
        .map_or("F", |(_, letter)| letter)
}

/// Credits are not stored; they are approximated from the course level
/// (`floor(level / 100) + 2`).
#[must_use]
pub const fn derive_credits(level: u32) -> u32 {
    level / 100 + 2
}
