//! 1-based pagination over an insertion-ordered collection.

use advis_core::responses::Pagination;

use crate::error::EngineError;

/// Largest page size accepted from callers.
pub const MAX_PAGE_SIZE: u32 = 500;

/// A requested page. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Reject a zero page, a zero page size, or a page size over the cap.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidQuery` describing the bad parameter.
    pub fn validate(self) -> Result<Self, EngineError> {
        if self.page == 0 {
            return Err(EngineError::InvalidQuery(String::from(
                "page must be 1 or greater",
            )));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(EngineError::InvalidQuery(format!(
                "pageSize must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(self)
    }
}

/// One page of rows plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub rows: Vec<T>,
    pub pagination: Pagination,
}

/// Slice `[(page - 1) * size, page * size)` out of `items`.
///
/// A page past the end yields no rows; `current_page` still echoes the
/// request.
///
/// # Errors
///
/// Returns `EngineError::InvalidQuery` if the request fails
/// [`PageRequest::validate`].
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Result<Paginated<T>, EngineError> {
    let request = request.validate()?;
    let total = items.len();
    let size = request.page_size as usize;
    let total_pages = total.div_ceil(size);

    let start = (request.page as usize - 1).saturating_mul(size);
    let rows: Vec<T> = items.into_iter().skip(start).take(size).collect();

    Ok(Paginated {
        rows,
        pagination: Pagination {
            current_page: request.page,
            page_size: request.page_size,
            total_filtered: saturating_u32(total),
            total_pages: saturating_u32(total_pages),
        },
    })
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
