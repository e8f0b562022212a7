//! Prelude for convenient imports.
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let words = ["kiwi", "Fig", "fig"];
//! let ranked = RankedMatcher::new("fi")
//!     .field(|w: &&str| Some(*w))
//!     .order_by(compare::alpha(|w: &&str| Some(*w)))
//!     .rank(&words);
//! assert_eq!(ranked, [&"fig", &"Fig", &"kiwi"]);
//! ```

// Query engine
pub use tabula_resource::{DataResource, Dir, FieldRegistry, QueryParams, Sortable};

// Ranking
pub use tabula_rank::{compare, triage, KeyCache, RankConfig, RankedMatcher};

#[cfg(feature = "macros")]
pub use tabula_macros::Sortable;
