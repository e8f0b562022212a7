//! # Tabula - In-Memory Table Queries and Typeahead Ranking
//!
//! Tabula answers the two questions a data-heavy UI keeps asking about a list
//! it already holds in memory:
//!
//! - **Which rows go on this page?** A [`DataResource`] filters, sorts and
//!   pages a borrowed slice according to [`QueryParams`] (the `page`, `size`,
//!   `sortBy`, `sortAsc` JSON a table widget sends).
//! - **Which suggestions come first?** A [`RankedMatcher`] splits candidates
//!   into relevance buckets by case-insensitive substring match, then orders
//!   each bucket with a comparator from [`rank::compare`].
//!
//! Both are synchronous and never mutate the caller's data. Results are
//! vectors of references into the original slice.
//!
//! ## Crates
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`resource`] | `tabula-resource` | `DataResource`, `QueryParams`, `FieldRegistry`, errors |
//! | [`rank`] | `tabula-rank` | `triage`, `RankedMatcher`, comparators, `KeyCache` |
//! | [`collate`] | `tabula-collate` | Locale collation and case-insensitive matching |
//!
//! ## Quick Start
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! struct City {
//!     name: &'static str,
//!     country: &'static str,
//!     population: u32,
//! }
//!
//! let cities = vec![
//!     City { name: "Verona", country: "Italy", population: 257_000 },
//!     City { name: "Venice", country: "Italy", population: 250_000 },
//!     City { name: "Aarhus", country: "Denmark", population: 290_000 },
//!     City { name: "Denver", country: "USA", population: 715_000 },
//! ];
//!
//! // Table view: biggest first, two per page.
//! let fields = FieldRegistry::new()
//!     .string("name", |c: &City| Some(c.name))
//!     .numeric("population", |c: &City| Some(c.population));
//! let resource = DataResource::new(&cities, &fields);
//! let page = resource.query(&QueryParams::new().sort_by("population").descending().page(0).size(2));
//! assert_eq!(page[0].name, "Denver");
//! assert_eq!(resource.count(), 4);
//!
//! // Typeahead: name matches before country matches, then alphabetical.
//! let ranked = RankedMatcher::new("den")
//!     .field(|c: &City| Some(c.name))
//!     .field(|c: &City| Some(c.country))
//!     .order_by(compare::alpha(|c: &City| Some(c.name)))
//!     .max_items(2)
//!     .rank(&cities);
//! let names: Vec<_> = ranked.iter().map(|c| c.name).collect();
//! assert_eq!(names, ["Denver", "Aarhus"]);
//! ```
//!
//! ## Deriving field registries
//!
//! With the `macros` feature, `#[derive(Sortable)]` builds the
//! [`FieldRegistry`] from field annotations. The generated code refers to
//! `tabula_resource`, so depend on that crate alongside `tabula`. The
//! attributes are documented on `tabula_macros::Sortable`.

// Sub-crates as modules
pub use tabula_collate as collate;
pub use tabula_rank as rank;
pub use tabula_resource as resource;

// Query engine
pub use tabula_resource::{
    CompareKind, DataResource, Dir, FieldRegistry, Number, QueryParams, ResourceError,
    SortField, SortNumber, SortText, Sortable, Window,
};

// Ranking
pub use tabula_rank::{
    highlight_ranges, retain_unique_by, segments, sorter, triage, triage_str, KeyCache,
    MatchPartition, RankConfig, RankedMatcher, Segment,
};

// Sortable derive macro (requires `features = ["macros"]`)
#[cfg(feature = "macros")]
pub use tabula_macros::Sortable;

pub mod prelude;
