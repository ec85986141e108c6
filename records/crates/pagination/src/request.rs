//! Page request value object.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::PageRequestError;

/// Page size used when no explicit size has been chosen.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// Page sizes offered by the records table selector.
pub const PAGE_SIZE_PRESETS: [usize; 4] = [8, 16, 32, 64];

/// Zero-based page index paired with a non-zero page size.
///
/// ## Invariants
/// - `page_size` is never zero, so offsets and page counts are always defined.
/// - `page` is unbounded; callers may request pages past the end of a
///   sequence and receive an empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page: usize,
    page_size: NonZeroUsize,
}

impl PageRequest {
    /// Build a request from an already validated page size.
    #[must_use]
    pub const fn new(page: usize, page_size: NonZeroUsize) -> Self {
        Self { page, page_size }
    }

    /// Build a request from a raw page size.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::ZeroPageSize`] when `page_size` is zero.
    pub fn try_new(page: usize, page_size: usize) -> Result<Self, PageRequestError> {
        NonZeroUsize::new(page_size)
            .map(|size| Self::new(page, size))
            .ok_or(PageRequestError::ZeroPageSize)
    }

    /// First page for the given page size.
    #[must_use]
    pub const fn first(page_size: NonZeroUsize) -> Self {
        Self::new(0, page_size)
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Number of rows per page.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Index of the first row covered by this request.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size.get())
    }

    /// Same page size, different page index.
    #[must_use]
    pub const fn with_page(self, page: usize) -> Self {
        Self::new(page, self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}
