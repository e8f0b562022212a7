//! Splitting candidates into matches and the rest.

use tabula_collate::Needle;

/// The result of [`triage`]: candidates that matched the query and those that
/// did not, each in their original relative order.
#[derive(Debug, PartialEq, Eq)]
pub struct MatchPartition<'a, C> {
    /// Candidates whose extracted text contains the query.
    pub matches: Vec<&'a C>,
    /// Everything else.
    pub rest: Vec<&'a C>,
}

impl<'a, C> MatchPartition<'a, C> {
    /// Total number of candidates across both halves.
    pub fn len(&self) -> usize {
        self.matches.len() + self.rest.len()
    }

    /// Returns `true` if there were no candidates at all.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.rest.is_empty()
    }

    /// Matches followed by the rest.
    pub fn concat(mut self) -> Vec<&'a C> {
        self.matches.append(&mut self.rest);
        self.matches
    }
}

impl<'a, C> Clone for MatchPartition<'a, C> {
    fn clone(&self) -> Self {
        MatchPartition {
            matches: self.matches.clone(),
            rest: self.rest.clone(),
        }
    }
}

/// Partitions `candidates` by whether `extract(candidate)` contains `query`,
/// ignoring case.
///
/// Both sides are lowercased before a plain substring test, so `"ver"` matches
/// `"Verona"` and `"Denver"` alike. An empty query matches every candidate.
/// An extractor returning `None` is treated as the empty string.
///
/// ```
/// use tabula_rank::triage;
///
/// struct City {
///     name: &'static str,
/// }
///
/// let cities = [
///     City { name: "Verona" },
///     City { name: "Denmark" },
///     City { name: "Venice" },
/// ];
///
/// let part = triage("ve", &cities, |c: &City| Some(c.name));
/// let matched: Vec<_> = part.matches.iter().map(|c| c.name).collect();
/// assert_eq!(matched, ["Verona", "Venice"]);
/// assert_eq!(part.rest.len(), 1);
/// ```
pub fn triage<'a, C, F>(query: &str, candidates: &'a [C], extract: F) -> MatchPartition<'a, C>
where
    F: for<'c> Fn(&'c C) -> Option<&'c str>,
{
    split(&Needle::new(query), candidates.iter(), &extract)
}

/// [`triage`] over plain strings.
pub fn triage_str<'a, S>(query: &str, candidates: &'a [S]) -> MatchPartition<'a, S>
where
    S: AsRef<str>,
{
    triage(query, candidates, |s: &S| Some(s.as_ref()))
}

/// Matches first, then everything else, each half in input order.
pub fn sorter<'a, C, F>(query: &str, candidates: &'a [C], extract: F) -> Vec<&'a C>
where
    F: for<'c> Fn(&'c C) -> Option<&'c str>,
{
    triage(query, candidates, extract).concat()
}

pub(crate) fn split<'a, C, I, F>(needle: &Needle, candidates: I, extract: &F) -> MatchPartition<'a, C>
where
    C: 'a,
    I: IntoIterator<Item = &'a C>,
    F: for<'c> Fn(&'c C) -> Option<&'c str> + ?Sized,
{
    let (matches, rest) = candidates
        .into_iter()
        .partition(|&candidate| needle.is_in(extract(candidate).unwrap_or("")));
    MatchPartition { matches, rest }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text<'a>(s: &'a &str) -> Option<&'a str> {
        Some(s)
    }

    fn maybe<'a>(v: &'a Option<&str>) -> Option<&'a str> {
        *v
    }

    #[test]
    fn triage_str_splits_in_order() {
        let names = ["Verona", "Denmark", "Venice", "denver"];
        let part = triage_str("VE", &names);
        assert_eq!(part.matches, vec![&"Verona", &"Venice", &"denver"]);
        assert_eq!(part.rest, vec![&"Denmark"]);
        assert_eq!(part.len(), 4);
    }

    #[test]
    fn substring_not_prefix() {
        let names = ["Accord", "Cordelia", "Accra"];
        let part = triage_str("cord", &names);
        assert_eq!(part.matches, vec![&"Accord", &"Cordelia"]);
    }

    #[test]
    fn empty_query_matches_all() {
        let names = ["a", "b"];
        let part = triage_str("", &names);
        assert_eq!(part.matches.len(), 2);
        assert!(part.rest.is_empty());
    }

    #[test]
    fn empty_candidates() {
        let names: [&str; 0] = [];
        let part = triage_str("x", &names);
        assert!(part.is_empty());
        assert!(sorter("x", &names, text).is_empty());
    }

    #[test]
    fn missing_text_is_empty_string() {
        let values = [Some("apple"), None, Some("grape")];
        let part = triage("ap", &values, maybe);
        assert_eq!(part.matches, vec![&Some("apple"), &Some("grape")]);
        assert_eq!(part.rest, vec![&None]);

        let all = triage("", &values, maybe);
        assert_eq!(all.matches.len(), 3);
    }

    #[test]
    fn sorter_concatenates() {
        let names = ["Denmark", "Verona", "Austria", "Venice"];
        let sorted = sorter("ve", &names, text);
        assert_eq!(sorted, vec![&"Verona", &"Venice", &"Denmark", &"Austria"]);
    }
}
