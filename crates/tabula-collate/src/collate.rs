//! Multi-level string collation.
//!
//! Strings are compared level by level. The primary level folds case and
//! transliterates non-ASCII characters through `deunicode`, and groups
//! characters into classes so whitespace sorts before punctuation, which sorts
//! before digits, which sort before letters. Later levels only break ties left
//! by earlier ones.

use std::cmp::Ordering;

use deunicode::deunicode_char;

/// How many collation levels to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Strength {
    /// Base letters only: case and accents are ignored.
    Primary,
    /// Base letters, then accents.
    Secondary,
    /// Base letters, accents, then case (lowercase first).
    Tertiary,
    /// All levels, then the raw code points. Only equal strings compare equal.
    #[default]
    Identical,
}

/// Character class used at the primary level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Punct,
    Digit,
    Letter,
}

impl Class {
    fn of(c: char) -> Class {
        if c.is_whitespace() {
            Class::Space
        } else if c.is_numeric() {
            Class::Digit
        } else if c.is_alphabetic() {
            Class::Letter
        } else {
            Class::Punct
        }
    }
}

/// Primary weights for one character, appended to `out`.
fn push_primary(c: char, out: &mut Vec<(Class, char)>) {
    if c.is_ascii() {
        out.push((Class::of(c), c.to_ascii_lowercase()));
        return;
    }

    match deunicode_char(c) {
        Some(folded) if !folded.trim().is_empty() => {
            for f in folded.chars().filter(|f| !f.is_whitespace()) {
                out.push((Class::of(f), f.to_ascii_lowercase()));
            }
        }
        _ => {
            for l in c.to_lowercase() {
                out.push((Class::of(c), l));
            }
        }
    }
}

fn primary_key(s: &str) -> Vec<(Class, char)> {
    let mut key = Vec::with_capacity(s.len());
    for c in s.chars() {
        push_primary(c, &mut key);
    }
    key
}

fn secondary_cmp(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    fold(a).cmp(&fold(b))
}

fn tertiary_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(char::is_uppercase)
        .cmp(b.chars().map(char::is_uppercase))
}

/// Compares two strings up to the given strength.
pub fn collate(a: &str, b: &str, strength: Strength) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut ordering = primary_key(a).cmp(&primary_key(b));
    if strength >= Strength::Secondary {
        ordering = ordering.then_with(|| secondary_cmp(a, b));
    }
    if strength >= Strength::Tertiary {
        ordering = ordering.then_with(|| tertiary_cmp(a, b));
    }
    if strength >= Strength::Identical {
        ordering = ordering.then_with(|| a.cmp(b));
    }
    ordering
}

/// Locale-aware comparison. Equal only for identical strings.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collate(a, b, Strength::Identical)
}

/// Case-insensitive locale-aware comparison.
///
/// Strings differing only in case compare equal; accents still matter.
pub fn locale_cmp_ci(a: &str, b: &str) -> Ordering {
    collate(a, b, Strength::Secondary)
}
