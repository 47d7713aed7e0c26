//! # advis-engine
//!
//! Risk scoring and the join layer that turns the snapshot tables into
//! dashboard view models.
//!
//! - [`risk::calculate_risk`] combines cumulative GPA and attendance into a
//!   0-100 score and a [`RiskTier`](advis_core::enums::RiskTier).
//! - [`grades`] holds the letter-grade cutoffs and the derived-credit rule.
//! - [`pagination`] slices filtered rosters into 1-based pages.
//! - [`AdvisService`] owns a shared `TableRepository` and builds every view:
//!   advisor dashboard, student search, student dashboard, profile, notes
//!   context and the risk report.

pub mod error;
pub mod grades;
pub mod pagination;
pub mod risk;
pub mod service;
mod test_support;
pub mod views;

pub use error::EngineError;
pub use pagination::{PageRequest, Paginated, paginate};
pub use risk::calculate_risk;
pub use service::{AdvisService, EngineSettings};
pub use views::roster::RosterQuery;
pub use views::search::SearchQuery;
