//! Locating query matches for display.

use std::ops::Range;

use tabula_collate::match_ranges;

/// Byte ranges of every case-insensitive occurrence of `query` in `text`.
///
/// Ranges do not overlap and always fall on character boundaries. An empty
/// query has no ranges.
pub fn highlight_ranges(query: &str, text: &str) -> Vec<Range<usize>> {
    match_ranges(query, text)
}

/// A run of text that either matched the query or did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t> {
    /// The text of this run.
    pub text: &'t str,
    /// Whether the run is an occurrence of the query.
    pub matched: bool,
}

/// Splits `text` into alternating matched and unmatched runs.
///
/// Concatenating the segments gives back `text`. Empty runs are omitted.
///
/// ```
/// use tabula_rank::{segments, Segment};
///
/// let parts = segments("ver", "Riverview");
/// assert_eq!(
///     parts,
///     [
///         Segment { text: "Ri", matched: false },
///         Segment { text: "ver", matched: true },
///         Segment { text: "view", matched: false },
///     ]
/// );
/// ```
pub fn segments<'t>(query: &str, text: &'t str) -> Vec<Segment<'t>> {
    let mut out = Vec::new();
    let mut cursor = 0;

    for range in highlight_ranges(query, text) {
        if range.start > cursor {
            out.push(Segment {
                text: &text[cursor..range.start],
                matched: false,
            });
        }
        out.push(Segment {
            text: &text[range.clone()],
            matched: true,
        });
        cursor = range.end;
    }
    if cursor < text.len() {
        out.push(Segment {
            text: &text[cursor..],
            matched: false,
        });
    }
    out
}
