//! Collate - locale-aware string ordering and case-insensitive matching.
//!
//! This crate holds the string primitives shared by the query engine and the
//! typeahead ranker:
//!
//! - [`locale_cmp`] orders strings the way a default-locale collator does:
//!   accents and case are ignored at first, then accents break ties, then case
//!   (lowercase before uppercase), and finally the raw bytes.
//! - [`locale_cmp_ci`] stops after the accent level, so `"Apple"` and `"apple"`
//!   compare equal.
//! - [`Needle`] and [`contains_ci`] implement the case-insensitive substring
//!   rule used for typeahead matching.
//! - [`match_ranges`] finds the byte ranges a highlighter would emphasize.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use tabula_collate::{contains_ci, locale_cmp};
//!
//! let mut names = vec!["banana", "Apple", "apple", "Éclair", "cherry"];
//! names.sort_by(|a, b| locale_cmp(a, b));
//! assert_eq!(names, ["apple", "Apple", "banana", "cherry", "Éclair"]);
//!
//! assert!(contains_ci("Verona", "VER"));
//! assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
//! ```
//!
//! Every comparison here is a total order, so the functions are safe to hand
//! to `slice::sort_by`.

mod collate;
mod matching;

pub use collate::{collate, locale_cmp, locale_cmp_ci, Strength};
pub use matching::{contains_ci, match_ranges, Needle};
