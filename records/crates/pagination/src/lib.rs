//! Offset pagination primitives shared by records list projections.
//!
//! The crate models the two halves of a paged table:
//!
//! - [`PageRequest`]: a zero-based page index plus a non-zero page size.
//! - [`Page`]: the half-open slice `[page * size, page * size + size)` of an
//!   already filtered and ordered sequence, together with the totals needed
//!   to render navigation.
//!
//! Requests past the last page are not errors; they produce an empty page.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::try_new(1, 2).expect("non-zero page size");
//! let page = Page::new(vec!["a", "b", "c", "d", "e"], request);
//!
//! assert_eq!(page.items(), &["c", "d"]);
//! assert_eq!(page.total_pages(), 3);
//! assert_eq!(page.summary(), "3-4 of 5");
//! ```

mod error;
mod page;
mod request;

pub use error::PageRequestError;
pub use page::{Page, total_pages};
pub use request::{DEFAULT_PAGE_SIZE, PAGE_SIZE_PRESETS, PageRequest};
