use std::collections::HashSet;
use std::hash::Hash;

/// Keeps the first item for each key, dropping later ones.
///
/// Useful after ranking when several candidates are aliases of the same thing
/// (`"js"` and `"javascript"`): rank first, then keep the best-placed alias.
///
/// ```
/// use tabula_rank::retain_unique_by;
///
/// fn canonical(lang: &&'static str) -> &'static str {
///     match *lang {
///         "js" => "javascript",
///         "py" => "python",
///         other => other,
///     }
/// }
///
/// let langs = ["javascript", "js", "json", "python", "py"];
/// let unique = retain_unique_by(langs, canonical);
/// assert_eq!(unique, ["javascript", "json", "python"]);
/// ```
pub fn retain_unique_by<T, K, F, I>(items: I, mut key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    K: Eq + Hash,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
