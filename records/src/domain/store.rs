//! In-memory record list and its table projection.
//!
//! [`RecordStore`] is the single writer of the record list. Views never
//! mutate rows directly; they change the query knobs (search text, sort,
//! page, page size) and re-read [`RecordStore::projection`], which always runs
//! filter, then sort, then paginate.

use std::num::NonZeroUsize;

use pagination::{DEFAULT_PAGE_SIZE, Page, PageRequest, total_pages};

use super::query::{SortConfig, search, sort_rows};
use super::record::{Record, RecordField, RecordId};

/// Owned record list plus the table's query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
    query: String,
    sort: Option<SortConfig>,
    request: PageRequest,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl RecordStore {
    /// Empty store showing the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store showing `page_size` rows per page.
    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            sort: None,
            request: PageRequest::first(page_size),
        }
    }

    /// Rows in arrival/update order, unfiltered.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of rows held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no rows are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row carrying `id`.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.id.as_ref() == Some(id))
    }

    /// Replace every row, e.g. after listing the remote resource.
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
        self.reset_page();
    }

    /// Append a row, e.g. after the remote store accepted a new record.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
        self.reset_page();
    }

    /// Replace the row carrying `id` in place.
    ///
    /// The stored row keeps `id` even if `record` carries none. Returns
    /// `false`, leaving the list untouched, when no row has that id.
    pub fn replace_by_id(&mut self, id: &RecordId, mut record: Record) -> bool {
        let Some(slot) = self
            .records
            .iter_mut()
            .find(|existing| existing.id.as_ref() == Some(id))
        else {
            return false;
        };
        if record.id.is_none() {
            record.id = Some(id.clone());
        }
        *slot = record;
        true
    }

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Change the search text and go back to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.reset_page();
    }

    /// Active ordering, if any.
    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    /// Sort by `key`, flipping the direction when `key` is already active.
    pub fn toggle_sort(&mut self, key: RecordField) -> SortConfig {
        let next = SortConfig::toggled(self.sort, key);
        self.sort = Some(next);
        next
    }

    /// Set or clear the ordering explicitly.
    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        self.sort = sort;
    }

    /// Current page index and size.
    pub fn page_request(&self) -> PageRequest {
        self.request
    }

    /// Jump to `page`. Pages past the end yield an empty projection.
    pub fn set_page(&mut self, page: usize) {
        self.request = self.request.with_page(page);
    }

    /// Advance one page. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        let next = self.request.page().saturating_add(1);
        if next >= self.total_pages() {
            return false;
        }
        self.set_page(next);
        true
    }

    /// Go back one page. Returns `false` on the first page.
    pub fn previous_page(&mut self) -> bool {
        match self.request.page().checked_sub(1) {
            Some(previous) => {
                self.set_page(previous);
                true
            }
            None => false,
        }
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.request = PageRequest::first(page_size);
    }

    /// Rows matching the search text, in arrival order.
    pub fn filtered(&self) -> Vec<&Record> {
        search(&self.records, &self.query)
    }

    /// Rows matching the search text, in display order.
    pub fn ordered(&self) -> Vec<&Record> {
        let mut rows = self.filtered();
        if let Some(sort) = self.sort {
            sort_rows(&mut rows, sort);
        }
        rows
    }

    /// Pages spanned by the filtered rows.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.request.page_size())
    }

    /// The visible page: filter, then sort, then paginate.
    pub fn projection(&self) -> Page<&Record> {
        Page::new(self.ordered(), self.request)
    }

    fn reset_page(&mut self) {
        self.set_page(0);
    }
}
