//! Error types for the resource crate.

use thiserror::Error;

/// Errors reported by the strict `try_*` query methods.
///
/// The lenient methods never fail: an unregistered sort field leaves the order
/// unchanged and a zero page size yields an empty page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// `sort_by` names a field that was never registered.
    #[error("unknown sort field '{field}'")]
    UnknownField { field: String },

    /// A page was requested with a page size of zero.
    #[error("page size must be positive when a page is requested")]
    ZeroPageSize,
}

/// Result type for resource operations.
pub type Result<T> = std::result::Result<T, ResourceError>;
