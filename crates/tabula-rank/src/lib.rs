//! Tabula rank - relevance ordering for typeahead suggestions.
//!
//! Ranking happens in two layers:
//!
//! 1. **Relevance buckets.** [`triage`] splits candidates into those whose
//!    text contains the query (ignoring case) and the rest. A
//!    [`RankedMatcher`] runs one triage round per field, so a name match
//!    always beats an email match, which beats no match at all.
//! 2. **Secondary order.** Inside each bucket, candidates are stably sorted
//!    with a caller comparator, typically built from the [`compare`] module.
//!
//! Secondary ordering never moves a candidate across buckets.
//!
//! # Quick Start
//!
//! ```rust
//! use tabula_rank::compare::{bool_priority, score_desc_then_alpha, then, BoolOrder};
//! use tabula_rank::RankedMatcher;
//!
//! struct Stream {
//!     name: &'static str,
//!     description: &'static str,
//!     subscribed: bool,
//!     weekly_traffic: u32,
//! }
//!
//! let streams = [
//!     Stream { name: "general", description: "Everything else", subscribed: true, weekly_traffic: 400 },
//!     Stream { name: "design", description: "Design reviews", subscribed: false, weekly_traffic: 80 },
//!     Stream { name: "design-system", description: "Tokens", subscribed: true, weekly_traffic: 12 },
//!     Stream { name: "frontend", description: "UI and design work", subscribed: true, weekly_traffic: 90 },
//! ];
//!
//! let ranked = RankedMatcher::new("design")
//!     .field(|s: &Stream| Some(s.name))
//!     .field(|s: &Stream| Some(s.description))
//!     .order_by(then(
//!         bool_priority(|s: &Stream| s.subscribed, BoolOrder::TrueFirst),
//!         score_desc_then_alpha(|s: &Stream| s.weekly_traffic, |s: &Stream| Some(s.name)),
//!     ))
//!     .max_items(3)
//!     .rank(&streams);
//!
//! let names: Vec<_> = ranked.iter().map(|s| s.name).collect();
//! assert_eq!(names, ["design-system", "design", "frontend"]);
//! ```

mod cache;
pub mod compare;
mod highlight;
mod rank;
mod triage;
mod unique;

pub use cache::KeyCache;
pub use highlight::{highlight_ranges, segments, Segment};
pub use rank::{RankConfig, RankedMatcher};
pub use triage::{sorter, triage, triage_str, MatchPartition};
pub use unique::retain_unique_by;
