//! The data resource: filter, sort and page a borrowed collection.

use std::future::{ready, Ready};

use tracing::{debug, warn};

use crate::error::{ResourceError, Result};
use crate::field::FieldRegistry;
use crate::params::QueryParams;

/// No-op filter type used when a query has no predicate.
type NoFilter<T> = fn(&T, usize, &[T]) -> bool;

/// A read-only view over a caller-owned collection.
///
/// The resource borrows both the items and the field registry, so it is cheap
/// to copy and cannot observe mutation while a query runs. Results are vectors
/// of references into the original slice; the slice itself is never reordered.
///
/// # Execution order
///
/// 1. Filter (or take every item), keeping the original relative order.
/// 2. Sort ascending by `sort_by` with a stable sort, then reverse the whole
///    result if `sort_asc` is `false`.
/// 3. Slice the [`Window`](crate::Window) derived from `page` and `size`.
///
/// # Example
///
/// ```
/// use tabula_resource::{DataResource, FieldRegistry, QueryParams};
///
/// struct Row {
///     name: &'static str,
///     age: u32,
/// }
///
/// let rows = vec![
///     Row { name: "Carla", age: 41 },
///     Row { name: "ana", age: 29 },
///     Row { name: "Bruno", age: 35 },
/// ];
/// let fields = FieldRegistry::new()
///     .string("name", |r: &Row| Some(r.name))
///     .numeric("age", |r: &Row| Some(r.age));
///
/// let resource = DataResource::new(&rows, &fields);
/// let page = resource.query(&QueryParams::new().sort_by("name").page(0).size(2));
/// let names: Vec<_> = page.iter().map(|r| r.name).collect();
/// assert_eq!(names, ["ana", "Bruno"]);
/// assert_eq!(resource.count(), 3);
/// ```
pub struct DataResource<'a, T> {
    items: &'a [T],
    fields: &'a FieldRegistry<T>,
}

impl<'a, T> Clone for DataResource<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for DataResource<'a, T> {}

impl<'a, T> std::fmt::Debug for DataResource<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataResource")
            .field("len", &self.items.len())
            .field("fields", self.fields)
            .finish()
    }
}

impl<'a, T> DataResource<'a, T> {
    /// Creates a resource over `items`, sorted through `fields`.
    pub fn new(items: &'a [T], fields: &'a FieldRegistry<T>) -> Self {
        DataResource { items, fields }
    }

    /// Returns the underlying items.
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Returns the field registry.
    pub fn fields(&self) -> &'a FieldRegistry<T> {
        self.fields
    }

    /// Total number of items, ignoring filters and pagination.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sorts and pages every item.
    pub fn query(&self, params: &QueryParams) -> Vec<&'a T> {
        self.lenient(params, None::<NoFilter<T>>)
    }

    /// Keeps items where `filter(item, index, items)` is true, then sorts and
    /// pages them.
    pub fn query_filtered<F>(&self, params: &QueryParams, filter: F) -> Vec<&'a T>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        self.lenient(params, Some(filter))
    }

    /// Like [`query`](Self::query), returning owned clones.
    pub fn query_cloned(&self, params: &QueryParams) -> Vec<T>
    where
        T: Clone,
    {
        self.query(params).into_iter().cloned().collect()
    }

    /// Like [`query_filtered`](Self::query_filtered), returning owned clones.
    pub fn query_filtered_cloned<F>(&self, params: &QueryParams, filter: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        self.query_filtered(params, filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Strict variant of [`query`](Self::query).
    ///
    /// Fails on an unregistered sort field or a zero page size.
    pub fn try_query(&self, params: &QueryParams) -> Result<Vec<&'a T>> {
        self.execute(params, None::<NoFilter<T>>, true)
    }

    /// Strict variant of [`query_filtered`](Self::query_filtered).
    pub fn try_query_filtered<F>(&self, params: &QueryParams, filter: F) -> Result<Vec<&'a T>>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        self.execute(params, Some(filter), true)
    }

    /// Runs [`query`](Self::query) and wraps the result in an
    /// already-resolved future, for callers that expect one.
    pub fn deferred_query(&self, params: &QueryParams) -> Ready<Vec<&'a T>> {
        ready(self.query(params))
    }

    /// Returns [`count`](Self::count) as an already-resolved future.
    pub fn deferred_count(&self) -> Ready<usize> {
        ready(self.count())
    }

    fn lenient<F>(&self, params: &QueryParams, filter: Option<F>) -> Vec<&'a T>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        // Lenient execution has no failure path.
        self.execute(params, filter, false).unwrap_or_default()
    }

    fn execute<F>(&self, params: &QueryParams, filter: Option<F>, strict: bool) -> Result<Vec<&'a T>>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        if strict && params.page.is_some() && params.size == Some(0) {
            return Err(ResourceError::ZeroPageSize);
        }

        let items = self.items;
        let mut rows: Vec<&'a T> = match filter {
            Some(mut keep) => items
                .iter()
                .enumerate()
                .filter(|&(index, item)| keep(item, index, items))
                .map(|(_, item)| item)
                .collect(),
            None => items.iter().collect(),
        };
        let matched = rows.len();

        if let Some(name) = params.sort_field() {
            match self.fields.get(name) {
                Some(field) => rows.sort_by(|a, b| field.compare(a, b)),
                None if strict => {
                    return Err(ResourceError::UnknownField {
                        field: name.to_string(),
                    })
                }
                None => warn!(field = name, "sort field is not registered, order unchanged"),
            }
            if params.direction().is_desc() {
                rows.reverse();
            }
        }

        if let Some(window) = params.window() {
            rows = window.apply(rows);
        }

        debug!(
            total = items.len(),
            matched,
            returned = rows.len(),
            sort_by = ?params.sort_by,
            dir = %params.direction(),
            "query executed"
        );

        Ok(rows)
    }
}
