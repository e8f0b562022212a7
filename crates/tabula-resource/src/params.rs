//! Query parameters and the page window derived from them.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Ascending order, then reversed.
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pagination and sort parameters for a query.
///
/// Every field is optional. The JSON shape uses the names table widgets
/// already send: `page`, `size`, `sortBy`, `sortAsc`.
///
/// # Offset convention
///
/// `page` has two meanings. With a `size`, it is a page index and the offset
/// is `page * size`. Without a `size`, `page` is used directly as the offset
/// and the result runs to the end of the collection. Both modes are kept for
/// compatibility with existing callers.
///
/// # Example
///
/// ```
/// use tabula_resource::{QueryParams, Window};
///
/// let params = QueryParams::new().page(2).size(10).sort_by("name").descending();
/// assert_eq!(params.window(), Some(Window { offset: 20, limit: Some(10) }));
///
/// let raw = QueryParams::new().page(7);
/// assert_eq!(raw.window(), Some(Window { offset: 7, limit: None }));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    /// Page index (with `size`) or raw offset (without).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    /// Page length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Name of a registered sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// `Some(false)` reverses the ascending order; anything else is ascending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_asc: Option<bool>,
}

impl QueryParams {
    /// Creates empty parameters: no filter on pages, no sorting.
    pub fn new() -> Self {
        QueryParams::default()
    }

    /// Sets the page index (or raw offset when no size is set).
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page length.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the sort field.
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    /// Sets the sort direction flag explicitly.
    pub fn sort_asc(mut self, asc: bool) -> Self {
        self.sort_asc = Some(asc);
        self
    }

    /// Sorts ascending.
    pub fn ascending(self) -> Self {
        self.sort_asc(true)
    }

    /// Sorts ascending, then reverses the result.
    pub fn descending(self) -> Self {
        self.sort_asc(false)
    }

    /// Sets the sort field and direction together.
    pub fn order(self, field: impl Into<String>, dir: Dir) -> Self {
        self.sort_by(field).sort_asc(dir.is_asc())
    }

    /// Returns the sort field, treating an empty name as unset.
    pub fn sort_field(&self) -> Option<&str> {
        self.sort_by.as_deref().filter(|name| !name.is_empty())
    }

    /// Returns the effective direction. Only an explicit `false` is descending.
    pub fn direction(&self) -> Dir {
        match self.sort_asc {
            Some(false) => Dir::Desc,
            _ => Dir::Asc,
        }
    }

    /// Derives the slice window, or `None` when no page is requested.
    ///
    /// The caller's parameters are left untouched.
    pub fn window(&self) -> Option<Window> {
        let page = self.page?;
        let offset = match self.size {
            Some(size) => page.saturating_mul(size),
            None => page,
        };
        Some(Window {
            offset,
            limit: self.size,
        })
    }

    /// Number of pages needed to show `total` items, when a size is set.
    ///
    /// A size of zero yields `None`.
    pub fn page_count(&self, total: usize) -> Option<usize> {
        match self.size {
            Some(size) if size > 0 => Some(total.div_ceil(size)),
            _ => None,
        }
    }
}

/// The effective slice of a query: where it starts and how long it may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    /// Index of the first row.
    pub offset: usize,
    /// Maximum number of rows, or `None` for "to the end".
    pub limit: Option<usize>,
}

impl Window {
    /// Returns the index range this window covers in a sequence of `len`
    /// rows, clamped to the sequence.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        let end = match self.limit {
            Some(limit) => start.saturating_add(limit).min(len),
            None => len,
        };
        start..end
    }

    /// Keeps only the rows inside the window.
    pub fn apply<R>(&self, mut rows: Vec<R>) -> Vec<R> {
        let range = self.range(rows.len());
        rows.truncate(range.end);
        rows.drain(..range.start);
        rows
    }
}
