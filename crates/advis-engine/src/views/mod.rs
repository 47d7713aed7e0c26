//! View-model operations on `AdvisService`.
//!
//! Each module adds methods to `AdvisService` via `impl AdvisService` blocks.

pub mod notes;
pub mod profile;
pub mod report;
pub mod roster;
pub mod search;
pub mod student;
