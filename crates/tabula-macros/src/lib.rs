//! Proc macros for Tabula.
//!
//! - [`Sortable`] - Generate a typed sort field registry from struct field
//!   annotations.
//!
//! For working examples, see `tabula/tests/sortable_derive.rs`.

mod sortable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Sortable` trait from `tabula-resource`.
///
/// Each annotated field becomes a registered sort field, so a
/// `DataResource` can sort by it through `QueryParams::sort_by`.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | Locale collation. The field type implements `SortText` (`String`, `&str`, `Option<String>`, ...) |
/// | `Number` | Numeric order. The field type implements `SortNumber` (any primitive number or an `Option` of one) |
/// | `Ord` | The field type's own `Ord` implementation |
/// | `skip` | Not sortable (same as leaving the field unannotated) |
/// | `rename = "..."` | Registry name to use instead of the field name |
/// | `ty = "..."` | Kind given as a string: `"string"`, `"number"` or `"ord"` |
///
/// `None` values in `Option` fields sort after every present value.
///
/// # Generated Code
///
/// 1. Field name constants (e.g. `Task::TITLE`, `Task::PRIO`)
/// 2. An implementation of `Sortable::sort_fields()`
///
/// # Example
///
/// ```ignore
/// use tabula_macros::Sortable;
/// use tabula_resource::{DataResource, QueryParams, Sortable};
///
/// #[derive(Sortable)]
/// struct Task {
///     #[sort(String)]
///     title: String,
///
///     #[sort(Number, rename = "prio")]
///     priority: u8,
///
///     #[sort(skip)]
///     internal_id: u64,
/// }
///
/// let tasks = vec![
///     Task { title: "Write docs".into(), priority: 3, internal_id: 1 },
///     Task { title: "Fix bug".into(), priority: 5, internal_id: 2 },
/// ];
///
/// let fields = Task::sort_fields();
/// let resource = DataResource::new(&tasks, &fields);
/// let rows = resource.query(&QueryParams::new().sort_by(Task::PRIO).descending());
/// assert_eq!(rows[0].title, "Fix bug");
/// ```
///
/// # Errors
///
/// Deriving on an enum, a tuple struct or a generic struct is a compile
/// error, as are unknown kinds and two fields sharing one registry name.
#[proc_macro_derive(Sortable, attributes(sort))]
pub fn sortable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    sortable::sortable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
