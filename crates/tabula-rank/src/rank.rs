//! Bucketed relevance ranking.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tabula_collate::Needle;
use tracing::{debug, trace};

use crate::triage::split;

type Extractor<'m, C> = Box<dyn for<'c> Fn(&'c C) -> Option<&'c str> + 'm>;
type Order<'m, C> = Box<dyn Fn(&C, &C) -> Ordering + 'm>;

/// Serializable matcher settings.
///
/// ```
/// use tabula_rank::RankConfig;
///
/// let config: RankConfig = serde_json::from_str(r#"{"maxItems":20,"promoteExact":true}"#).unwrap();
/// assert_eq!(config.max_items, Some(20));
/// assert!(config.promote_exact);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankConfig {
    /// Maximum number of results. `None` keeps everything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Move exact matches of the first field to the front.
    pub promote_exact: bool,
}

/// Ranks candidates into relevance buckets, then orders each bucket.
///
/// Each registered field is a triage round: candidates whose field contains
/// the query form the next bucket, and the rest go on to the following field.
/// Whatever no field matched becomes the last bucket. Buckets are ordered with
/// the secondary comparator and concatenated in priority order.
///
/// With [`max_items`](Self::max_items), buckets past the cap are never
/// sorted: once enough results are collected the comparator is not called
/// again.
///
/// # Example
///
/// ```
/// use tabula_rank::RankedMatcher;
///
/// struct User {
///     name: &'static str,
///     email: &'static str,
///     pms: u32,
/// }
///
/// let users = [
///     User { name: "Ann", email: "ann@cordova.org", pms: 50 },
///     User { name: "Cordelia", email: "cdl@example.com", pms: 1 },
///     User { name: "Bo", email: "bo@example.com", pms: 9 },
/// ];
///
/// let ranked = RankedMatcher::new("cord")
///     .field(|u: &User| Some(u.name))
///     .field(|u: &User| Some(u.email))
///     .order_by(|a: &User, b: &User| b.pms.cmp(&a.pms))
///     .rank(&users);
///
/// let names: Vec<_> = ranked.iter().map(|u| u.name).collect();
/// assert_eq!(names, ["Cordelia", "Ann", "Bo"]);
/// ```
pub struct RankedMatcher<'m, C> {
    query: String,
    fields: Vec<Extractor<'m, C>>,
    order: Option<Order<'m, C>>,
    exact: Option<Extractor<'m, C>>,
    promote_first: bool,
    max_items: Option<usize>,
}

impl<'m, C> RankedMatcher<'m, C> {
    /// Creates a matcher for `query` with no fields and no ordering.
    pub fn new(query: impl Into<String>) -> Self {
        RankedMatcher {
            query: query.into(),
            fields: Vec::new(),
            order: None,
            exact: None,
            promote_first: false,
            max_items: None,
        }
    }

    /// Creates a matcher using the cap and promotion flag from `config`.
    ///
    /// With `promote_exact` set, exact matches are judged on the first
    /// registered field unless [`promote_exact`](Self::promote_exact) names
    /// another one.
    pub fn from_config(query: impl Into<String>, config: &RankConfig) -> Self {
        let mut matcher = RankedMatcher::new(query);
        matcher.max_items = config.max_items;
        matcher.promote_first = config.promote_exact;
        matcher
    }

    /// Adds a triage round on the text returned by `extract`.
    pub fn field<F>(mut self, extract: F) -> Self
    where
        F: for<'c> Fn(&'c C) -> Option<&'c str> + 'm,
    {
        self.fields.push(Box::new(extract));
        self
    }

    /// Sets the ordering used inside every bucket.
    pub fn order_by<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&C, &C) -> Ordering + 'm,
    {
        self.order = Some(Box::new(cmp));
        self
    }

    /// Caps the number of results.
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Moves candidates whose `extract` text equals the query exactly to the
    /// front of the first bucket, after it has been ordered.
    pub fn promote_exact<F>(mut self, extract: F) -> Self
    where
        F: for<'c> Fn(&'c C) -> Option<&'c str> + 'm,
    {
        self.exact = Some(Box::new(extract));
        self
    }

    /// Returns the query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Ranks `candidates`.
    pub fn rank<'a>(&self, candidates: &'a [C]) -> Vec<&'a C> {
        let limit = self.max_items.unwrap_or(usize::MAX);
        if limit == 0 {
            return Vec::new();
        }

        let buckets = self.buckets(candidates);
        let bucket_count = buckets.len();
        let mut ranked: Vec<&'a C> = Vec::new();

        for (index, mut bucket) in buckets.into_iter().enumerate() {
            if ranked.len() >= limit {
                trace!(
                    skipped = bucket_count - index,
                    "result cap reached, remaining buckets left unsorted"
                );
                break;
            }
            if let Some(order) = &self.order {
                bucket.sort_by(|a, b| order(*a, *b));
            }
            if index == 0 {
                self.promote(&mut bucket);
            }
            ranked.append(&mut bucket);
        }
        ranked.truncate(limit);

        debug!(
            query = %self.query,
            candidates = candidates.len(),
            buckets = bucket_count,
            returned = ranked.len(),
            "ranked candidates"
        );
        ranked
    }

    fn buckets<'a>(&self, candidates: &'a [C]) -> Vec<Vec<&'a C>> {
        let needle = Needle::new(&self.query);
        let mut buckets = Vec::with_capacity(self.fields.len() + 1);
        let mut pending: Vec<&'a C> = candidates.iter().collect();

        for extract in &self.fields {
            let part = split(&needle, pending, extract.as_ref());
            buckets.push(part.matches);
            pending = part.rest;
        }
        buckets.push(pending);
        buckets
    }

    fn promote(&self, bucket: &mut Vec<&C>) {
        let extract = match (&self.exact, self.promote_first) {
            (Some(extract), _) => extract.as_ref(),
            (None, true) => match self.fields.first() {
                Some(extract) => extract.as_ref(),
                None => return,
            },
            (None, false) => return,
        };
        let (mut exact, rest): (Vec<&C>, Vec<&C>) = bucket
            .drain(..)
            .partition(|&candidate| extract(candidate) == Some(self.query.as_str()));
        exact.extend(rest);
        *bucket = exact;
    }
}
