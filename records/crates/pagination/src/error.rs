//! Error types for page request construction.

use thiserror::Error;

/// Errors raised when a page request cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The requested page size was zero.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}
