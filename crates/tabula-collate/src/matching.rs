//! Case-insensitive substring matching.

use std::ops::Range;

/// A lowercased query, prepared once and tested against many texts.
///
/// Matching lowercases both sides one character at a time and then checks for
/// a substring, so an empty needle is contained in every text. Whole-string
/// rules such as the Greek final sigma are not applied, which keeps
/// [`Needle::is_in`] and [`match_ranges`] in agreement.
///
/// # Example
///
/// ```
/// use tabula_collate::Needle;
///
/// let needle = Needle::new("ver");
/// assert!(needle.is_in("Verona"));
/// assert!(needle.is_in("Denver"));
/// assert!(!needle.is_in("Denmark"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    lowered: String,
    chars: Vec<char>,
}

impl Needle {
    /// Prepares a needle from a raw query.
    pub fn new(query: &str) -> Self {
        let chars: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
        Needle {
            lowered: chars.iter().collect(),
            chars,
        }
    }

    /// Returns the lowercased query.
    pub fn as_str(&self) -> &str {
        &self.lowered
    }

    /// Returns `true` if the needle is empty.
    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    /// Returns `true` if the text contains the needle, ignoring case.
    pub fn is_in(&self, text: &str) -> bool {
        if self.chars.is_empty() {
            return true;
        }
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        (0..chars.len()).any(|i| match_at(&chars, i, &self.chars).is_some())
    }

    /// Byte ranges of the needle's non-overlapping occurrences in `text`.
    fn ranges_in(&self, text: &str) -> Vec<Range<usize>> {
        if self.chars.is_empty() {
            return Vec::new();
        }

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut ranges = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            match match_at(&chars, i, &self.chars) {
                Some(end) => {
                    let start_byte = chars[i].0;
                    let end_byte = chars.get(end).map_or(text.len(), |(b, _)| *b);
                    ranges.push(start_byte..end_byte);
                    i = end;
                }
                None => i += 1,
            }
        }

        ranges
    }
}

/// Returns `true` if `haystack` contains `needle`, ignoring case.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    Needle::new(needle).is_in(haystack)
}

/// Returns the byte ranges of non-overlapping, case-insensitive occurrences of
/// `needle` in `haystack`, scanning left to right.
///
/// Ranges always fall on character boundaries of `haystack`, so they can be
/// used to slice it directly.
///
/// ```
/// use tabula_collate::match_ranges;
///
/// let text = "Cordelia cordially";
/// let ranges = match_ranges("cord", text);
/// assert_eq!(ranges, vec![0..4, 9..13]);
/// assert_eq!(&text[ranges[1].clone()], "cord");
/// ```
pub fn match_ranges(needle: &str, haystack: &str) -> Vec<Range<usize>> {
    Needle::new(needle).ranges_in(haystack)
}

/// Tries to match the needle starting at char index `start`.
///
/// Returns the char index one past the match.
fn match_at(chars: &[(usize, char)], start: usize, needle: &[char]) -> Option<usize> {
    let mut n = 0;
    let mut j = start;

    while n < needle.len() {
        let (_, c) = chars.get(j)?;
        for lc in c.to_lowercase() {
            if needle.get(n) != Some(&lc) {
                return None;
            }
            n += 1;
        }
        j += 1;
    }

    Some(j)
}
