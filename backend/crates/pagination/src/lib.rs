//! Offset pagination primitives shared by IDM backend endpoints.
//!
//! [`PageParams`] captures a validated page size and zero-based page number
//! and derives the row offset used by storage adapters. [`Page`] is the
//! envelope returned to clients: the rows of one page together with the
//! parameters that produced it and the total number of matching rows.

use serde::{Deserialize, Serialize};

/// Largest page size accepted by [`PageParams::new`].
pub const MAX_PAGE_SIZE: u32 = 100;

/// Smallest page size accepted by [`PageParams::new`].
pub const MIN_PAGE_SIZE: u32 = 1;

/// Errors raised while constructing pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// The requested page size is outside `MIN_PAGE_SIZE..=MAX_PAGE_SIZE`.
    #[error("page size {page_size} must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}")]
    PageSizeOutOfRange {
        /// Rejected page size.
        page_size: u32,
    },
    /// The row offset `page_size * page_number` does not fit in an `i64`.
    #[error("page {page_number} of size {page_size} is beyond the addressable range")]
    OffsetOutOfRange {
        /// Requested page size.
        page_size: u32,
        /// Rejected page number.
        page_number: u64,
    },
}

/// Validated offset pagination parameters.
///
/// # Examples
/// ```
/// use pagination::PageParams;
///
/// let params = PageParams::new(3, 2).expect("valid params");
/// assert_eq!(params.offset(), 6);
/// assert_eq!(params.limit(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageParams {
    page_size: u32,
    page_number: u64,
    offset: i64,
}

impl PageParams {
    /// Build parameters for the zero-based `page_number` of `page_size` rows.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::PageSizeOutOfRange`] when `page_size` is
    /// zero or larger than [`MAX_PAGE_SIZE`], and
    /// [`PaginationError::OffsetOutOfRange`] when the row offset overflows an
    /// `i64`.
    pub fn new(page_size: u32, page_number: u64) -> Result<Self, PaginationError> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(PaginationError::PageSizeOutOfRange { page_size });
        }
        let offset = u64::from(page_size)
            .checked_mul(page_number)
            .and_then(|rows| i64::try_from(rows).ok())
            .ok_or(PaginationError::OffsetOutOfRange {
                page_size,
                page_number,
            })?;
        Ok(Self {
            page_size,
            page_number,
            offset,
        })
    }

    /// Number of rows per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page_number(&self) -> u64 {
        self.page_number
    }

    /// Row limit for the storage query; always equal to the page size.
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Number of rows to skip before the first row of this page.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }
}

/// One page of results plus the parameters that produced it.
///
/// Serialises with snake_case keys:
/// `{"result":[..],"page_size":3,"page_number":0,"total":5}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Rows belonging to this page, in storage order.
    pub result: Vec<T>,
    /// Echo of the requested page size.
    pub page_size: u32,
    /// Echo of the requested page number.
    pub page_number: u64,
    /// Number of rows matching the query across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Assemble a page from its parameters, rows, and total match count.
    #[must_use]
    pub const fn new(params: PageParams, result: Vec<T>, total: u64) -> Self {
        Self {
            result,
            page_size: params.page_size,
            page_number: params.page_number,
            total,
        }
    }

    /// Convert every row while preserving the page metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            result: self.result.into_iter().map(f).collect(),
            page_size: self.page_size,
            page_number: self.page_number,
            total: self.total,
        }
    }
}
