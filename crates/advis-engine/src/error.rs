//! Engine error types for advis-engine.

use advis_core::errors::CoreError;
use advis_data::DataError;
use thiserror::Error;

/// Errors from view-model operations.
///
/// Empty joins and out-of-range pages are not errors; they produce empty
/// collections or `null` fields instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No student with this id exists in the students table.
    #[error("Student not found: {0}")]
    StudentNotFound(u32),

    /// A filter or pagination parameter is outside its contract.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A table could not be loaded.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Domain validation error (e.g. an unknown risk tier).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl EngineError {
    /// Whether the caller should render a "not found" state.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StudentNotFound(_) | Self::Core(CoreError::NotFound { .. })
        )
    }

    /// Whether the caller passed bad input (as opposed to a data failure).
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuery(_) | Self::Core(CoreError::Validation(_))
        )
    }
}
