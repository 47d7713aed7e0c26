//! Cross-cutting error types for Advis.
//!
//! Domain-specific errors (`DataError`, `EngineError`) are defined in their
//! respective crates. A unified error is deferred to `advis-cli` where all
//! crate errors converge into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Advis crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation (unknown enum value, out-of-contract parameter).
    #[error("Validation error: {0}")]
    Validation(String),
}
