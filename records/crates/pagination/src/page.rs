//! Page envelope produced by slicing an ordered sequence.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::PageRequest;

/// Number of pages needed to show `total_items` rows, `ceil(total / size)`.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use pagination::total_pages;
///
/// let size = NonZeroUsize::new(2).expect("non-zero");
/// assert_eq!(total_pages(5, size), 3);
/// assert_eq!(total_pages(0, size), 0);
/// ```
#[must_use]
pub const fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// One page of rows plus the totals of the sequence it was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    request: PageRequest,
    total_items: usize,
}

impl<T> Page<T> {
    /// Cut the half-open slice selected by `request` out of `rows`.
    ///
    /// Pages past the end of `rows` are empty.
    #[must_use]
    pub fn new(rows: Vec<T>, request: PageRequest) -> Self {
        let total_items = rows.len();
        let items = rows
            .into_iter()
            .skip(request.offset())
            .take(request.page_size().get())
            .collect();
        Self {
            items,
            request,
            total_items,
        }
    }

    /// Rows on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page and return its rows.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Request the page was cut with.
    #[must_use]
    pub const fn request(&self) -> PageRequest {
        self.request
    }

    /// Length of the whole sequence before slicing.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages the whole sequence spans.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.request.page_size())
    }

    /// Whether a page before this one exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.request.page() > 0
    }

    /// Whether a page after this one exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.request.page().saturating_add(1) < self.total_pages()
    }

    /// One-based positions of the first and last rows on this page.
    ///
    /// Returns `None` for an empty page.
    #[must_use]
    pub fn row_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = self.request.offset().saturating_add(1);
        let last = self.request.offset().saturating_add(self.items.len());
        Some((first, last))
    }

    /// Human-readable `start-end of total` summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let (first, last) = self.row_range().unwrap_or((0, 0));
        format!("{first}-{last} of {}", self.total_items)
    }

    /// Transform every row while keeping the paging metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            request: self.request,
            total_items: self.total_items,
        }
    }
}
