//! Typed sort fields.
//!
//! A [`FieldRegistry`] maps field names to [`SortField`]s. Each field says up
//! front how it compares (see [`CompareKind`]), so the engine never guesses a
//! comparison from the runtime shape of a value.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use tabula_collate::locale_cmp;

use crate::number::Number;

/// Accessor for a string-compared field.
pub type StringAccessor<T> = Box<dyn for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync>;

/// Accessor for a numerically compared field.
pub type NumericAccessor<T> = Box<dyn Fn(&T) -> Option<Number> + Send + Sync>;

/// Caller-supplied comparator for a custom field.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// How a field is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareKind {
    /// Locale-aware string collation.
    String,
    /// Numeric comparison.
    Numeric,
    /// Caller-supplied comparator.
    Custom,
}

impl CompareKind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            CompareKind::String => "string",
            CompareKind::Numeric => "numeric",
            CompareKind::Custom => "custom",
        }
    }
}

impl fmt::Display for CompareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sortable field: an accessor tagged with its comparison kind.
///
/// String and numeric accessors may return `None` for a missing value.
/// Missing values sort after present ones, so the ascending order is total.
pub enum SortField<T> {
    /// Compared with [`tabula_collate::locale_cmp`].
    String(StringAccessor<T>),
    /// Compared with [`Number::sort_cmp`].
    Numeric(NumericAccessor<T>),
    /// Compared with the given function.
    Custom(Comparator<T>),
}

impl<T> SortField<T> {
    /// Returns the comparison kind of this field.
    pub fn kind(&self) -> CompareKind {
        match self {
            SortField::String(_) => CompareKind::String,
            SortField::Numeric(_) => CompareKind::Numeric,
            SortField::Custom(_) => CompareKind::Custom,
        }
    }

    /// Compares two items by this field in ascending order.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortField::String(get) => missing_last(get(a), get(b), locale_cmp),
            SortField::Numeric(get) => missing_last(get(a), get(b), Number::sort_cmp),
            SortField::Custom(cmp) => cmp(a, b),
        }
    }
}

impl<T> fmt::Debug for SortField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SortField").field(&self.kind()).finish()
    }
}

fn missing_last<V>(a: Option<V>, b: Option<V>, cmp: impl FnOnce(V, V) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Name-to-field mapping, registered once and reused across queries.
///
/// # Example
///
/// ```
/// use tabula_resource::{CompareKind, FieldRegistry};
///
/// struct City {
///     name: String,
///     population: u32,
/// }
///
/// let fields = FieldRegistry::new()
///     .string("name", |c: &City| Some(c.name.as_str()))
///     .numeric("population", |c: &City| Some(c.population));
///
/// assert_eq!(fields.get("name").map(|f| f.kind()), Some(CompareKind::String));
/// assert!(fields.get("country").is_none());
/// ```
pub struct FieldRegistry<T> {
    fields: BTreeMap<String, SortField<T>>,
}

impl<T> FieldRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        FieldRegistry {
            fields: BTreeMap::new(),
        }
    }

    /// Registers a string field compared with locale-aware collation.
    pub fn string<F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
    {
        self.insert(name, SortField::String(Box::new(accessor)));
        self
    }

    /// Registers a numeric field.
    pub fn numeric<F, N>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> Option<N> + Send + Sync + 'static,
        N: Into<Number>,
    {
        let accessor = move |item: &T| accessor(item).map(Into::<Number>::into);
        self.insert(name, SortField::Numeric(Box::new(accessor)));
        self
    }

    /// Registers a field with a caller-supplied ascending comparator.
    pub fn custom<F>(mut self, name: impl Into<String>, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.insert(name, SortField::Custom(Box::new(comparator)));
        self
    }

    /// Inserts a field, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, field: SortField<T>) -> Option<SortField<T>> {
        self.fields.insert(name.into(), field)
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&SortField<T>> {
        self.fields.get(name)
    }

    /// Returns `true` if a field with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates over registered field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> Default for FieldRegistry<T> {
    fn default() -> Self {
        FieldRegistry::new()
    }
}

impl<T> fmt::Debug for FieldRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|(name, field)| (name, field.kind())))
            .finish()
    }
}

/// Types that provide their own sort field registry.
///
/// This trait is typically derived using `#[derive(Sortable)]` from the
/// `tabula-macros` crate, but can also be implemented manually.
///
/// # Manual Implementation
///
/// ```
/// use tabula_resource::{FieldRegistry, Sortable};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Sortable for Task {
///     fn sort_fields() -> FieldRegistry<Self> {
///         FieldRegistry::new()
///             .string("name", |t: &Task| Some(t.name.as_str()))
///             .numeric("priority", |t: &Task| Some(t.priority))
///     }
/// }
///
/// assert_eq!(Task::sort_fields().len(), 2);
/// ```
pub trait Sortable: Sized {
    /// Builds the registry of sortable fields for this type.
    fn sort_fields() -> FieldRegistry<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: Option<String>,
        score: f64,
        flag: bool,
    }

    fn item(name: Option<&str>, score: f64, flag: bool) -> Item {
        Item {
            name: name.map(str::to_string),
            score,
            flag,
        }
    }

    fn registry() -> FieldRegistry<Item> {
        FieldRegistry::new()
            .string("name", |i: &Item| i.name.as_deref())
            .numeric("score", |i: &Item| Some(i.score))
            .custom("flag", |a: &Item, b: &Item| a.flag.cmp(&b.flag))
    }

    #[test]
    fn kinds_are_explicit() {
        let fields = registry();
        assert_eq!(fields.get("name").map(SortField::kind), Some(CompareKind::String));
        assert_eq!(fields.get("score").map(SortField::kind), Some(CompareKind::Numeric));
        assert_eq!(fields.get("flag").map(SortField::kind), Some(CompareKind::Custom));
    }

    #[test]
    fn string_field_uses_locale_collation() {
        let fields = registry();
        let name = fields.get("name").unwrap();
        let a = item(Some("apple"), 0.0, false);
        let b = item(Some("Banana"), 0.0, false);
        assert_eq!(name.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn missing_values_sort_last() {
        let fields = registry();
        let name = fields.get("name").unwrap();
        let present = item(Some("zzz"), 0.0, false);
        let missing = item(None, 0.0, false);
        assert_eq!(name.compare(&present, &missing), Ordering::Less);
        assert_eq!(name.compare(&missing, &present), Ordering::Greater);
        assert_eq!(name.compare(&missing, &missing), Ordering::Equal);
    }

    #[test]
    fn numeric_field_handles_nan() {
        let fields = registry();
        let score = fields.get("score").unwrap();
        let nan = item(None, f64::NAN, false);
        let one = item(None, 1.0, false);
        assert_eq!(score.compare(&one, &nan), Ordering::Less);
    }

    #[test]
    fn custom_field_delegates() {
        let fields = registry();
        let flag = fields.get("flag").unwrap();
        assert_eq!(
            flag.compare(&item(None, 0.0, false), &item(None, 0.0, true)),
            Ordering::Less
        );
    }

    #[test]
    fn registry_introspection() {
        let fields = registry();
        assert_eq!(fields.len(), 3);
        assert!(!fields.is_empty());
        assert!(fields.contains("score"));
        assert_eq!(fields.names().collect::<Vec<_>>(), vec!["flag", "name", "score"]);
        assert_eq!(
            format!("{:?}", fields),
            r#"{"flag": Custom, "name": String, "score": Numeric}"#
        );
    }

    #[test]
    fn insert_replaces() {
        let mut fields = registry();
        let old = fields.insert("name", SortField::Custom(Box::new(|_: &Item, _: &Item| Ordering::Equal)));
        assert_eq!(old.map(|f| f.kind()), Some(CompareKind::String));
        assert_eq!(fields.get("name").map(SortField::kind), Some(CompareKind::Custom));
    }

    #[test]
    fn compare_kind_display() {
        assert_eq!(CompareKind::String.to_string(), "string");
        assert_eq!(CompareKind::Numeric.to_string(), "numeric");
        assert_eq!(CompareKind::Custom.to_string(), "custom");
    }
}
