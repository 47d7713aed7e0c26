//! Student search by name or major.

use advis_core::responses::StudentSearchResponse;

use crate::error::EngineError;
use crate::pagination::paginate;
use crate::service::{AdvisService, ScoredStudent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Case-insensitive substring of the name or major. Empty matches all.
    pub query: String,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

impl AdvisService {
    /// # Errors
    ///
    /// Returns `EngineError` if a table fails to load or the page request is
    /// invalid.
    pub async fn search_students(
        &self,
        query: &SearchQuery,
    ) -> Result<StudentSearchResponse, EngineError> {
        let request = self.page_request(query.page, query.page_size).validate()?;
        let needle = query.query.to_lowercase();
        tracing::debug!(query = %needle, ?request, "student search");

        let matches: Vec<_> = self
            .scored_roster()
            .await?
            .iter()
            .filter(|s| {
                needle.is_empty()
                    || s.student.name.to_lowercase().contains(&needle)
                    || s.student.major.to_lowercase().contains(&needle)
            })
            .map(ScoredStudent::to_row)
            .collect();
        let page = paginate(matches, request)?;

        Ok(StudentSearchResponse {
            query: query.query.clone(),
            student_rows: page.rows,
            pagination: page.pagination,
        })
    }
}
