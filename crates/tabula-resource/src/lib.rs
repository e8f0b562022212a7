//! Tabula resource - in-memory query engine for table views.
//!
//! A [`DataResource`] borrows a caller-owned slice and answers paged, sorted,
//! filtered views of it without ever reordering the slice itself. Sorting goes
//! through a [`FieldRegistry`] built once per record type, so each field
//! declares up front whether it compares as a string, a number, or with a
//! custom comparator.
//!
//! # Quick Start
//!
//! ```rust
//! use tabula_resource::{DataResource, FieldRegistry, QueryParams};
//!
//! struct Contact {
//!     name: String,
//!     age: u32,
//! }
//!
//! let contacts = vec![
//!     Contact { name: "Émile".into(), age: 30 },
//!     Contact { name: "dora".into(), age: 25 },
//!     Contact { name: "Bea".into(), age: 41 },
//! ];
//!
//! let fields = FieldRegistry::new()
//!     .string("name", |c: &Contact| Some(c.name.as_str()))
//!     .numeric("age", |c: &Contact| Some(c.age));
//!
//! let resource = DataResource::new(&contacts, &fields);
//!
//! // Ascending locale order: accents fold onto their base letter.
//! let by_name = resource.query(&QueryParams::new().sort_by("name"));
//! let names: Vec<_> = by_name.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["Bea", "dora", "Émile"]);
//!
//! // Oldest first, one per page, second page.
//! let params = QueryParams::new().sort_by("age").descending().page(1).size(1);
//! assert_eq!(resource.query(&params)[0].name, "Émile");
//! ```
//!
//! # Query parameters
//!
//! [`QueryParams`] deserializes from the JSON table widgets send:
//!
//! ```rust
//! use tabula_resource::QueryParams;
//!
//! let params: QueryParams =
//!     serde_json::from_str(r#"{"page":0,"size":10,"sortBy":"name","sortAsc":false}"#).unwrap();
//! assert_eq!(params.sort_field(), Some("name"));
//! assert!(params.direction().is_desc());
//! ```
//!
//! # Lenient and strict execution
//!
//! [`DataResource::query`] never fails: an unknown sort field leaves the
//! order unchanged (with a `tracing` warning). The `try_*` variants report the
//! same situations as [`ResourceError`]s instead.

mod error;
mod field;
mod key;
mod number;
mod params;
mod resource;

pub use error::{ResourceError, Result};
pub use field::{
    CompareKind, Comparator, FieldRegistry, NumericAccessor, SortField, Sortable, StringAccessor,
};
pub use key::{SortNumber, SortText};
pub use number::Number;
pub use params::{Dir, QueryParams, Window};
pub use resource::DataResource;
