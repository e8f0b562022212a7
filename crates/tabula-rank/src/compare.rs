//! Secondary orderings for ranked buckets.
//!
//! Every function here returns a plain `Fn(&C, &C) -> Ordering` that can be
//! handed to [`RankedMatcher::order_by`](crate::RankedMatcher::order_by) or to
//! `slice::sort_by`. All of them are total and deterministic as long as the
//! key functions they wrap are.
//!
//! # Example
//!
//! ```
//! use tabula_rank::compare::{bool_priority, score_desc_then_alpha, then, BoolOrder};
//!
//! struct Stream {
//!     name: &'static str,
//!     pinned: bool,
//!     traffic: u32,
//! }
//!
//! let order = then(
//!     bool_priority(|s: &Stream| s.pinned, BoolOrder::TrueFirst),
//!     score_desc_then_alpha(|s: &Stream| s.traffic, |s: &Stream| Some(s.name)),
//! );
//!
//! let mut streams = vec![
//!     Stream { name: "random", pinned: false, traffic: 90 },
//!     Stream { name: "design", pinned: false, traffic: 90 },
//!     Stream { name: "ops", pinned: true, traffic: 3 },
//! ];
//! streams.sort_by(|a, b| order(a, b));
//!
//! let names: Vec<_> = streams.iter().map(|s| s.name).collect();
//! assert_eq!(names, ["ops", "design", "random"]);
//! ```

use std::cmp::Ordering;

use tabula_collate::{locale_cmp, locale_cmp_ci};

/// Which side of a boolean flag sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoolOrder {
    /// Items with the flag set come first.
    #[default]
    TrueFirst,
    /// Items without the flag come first.
    FalseFirst,
}

/// Orders by a boolean flag.
pub fn bool_priority<C, F>(flag: F, order: BoolOrder) -> impl Fn(&C, &C) -> Ordering
where
    F: Fn(&C) -> bool,
{
    move |a: &C, b: &C| match order {
        BoolOrder::TrueFirst => flag(b).cmp(&flag(a)),
        BoolOrder::FalseFirst => flag(a).cmp(&flag(b)),
    }
}

/// Orders by a score, highest first.
pub fn score_desc<C, K, S>(score: S) -> impl Fn(&C, &C) -> Ordering
where
    K: Ord,
    S: Fn(&C) -> K,
{
    move |a: &C, b: &C| score(b).cmp(&score(a))
}

/// Orders by text using locale collation. Missing text is the empty string.
pub fn alpha<C, N>(name: N) -> impl Fn(&C, &C) -> Ordering
where
    N: for<'c> Fn(&'c C) -> Option<&'c str>,
{
    move |a: &C, b: &C| locale_cmp(name(a).unwrap_or(""), name(b).unwrap_or(""))
}

/// Orders by text, ignoring case. Usually the last tie-break in a chain.
pub fn locale_ci<C, N>(name: N) -> impl Fn(&C, &C) -> Ordering
where
    N: for<'c> Fn(&'c C) -> Option<&'c str>,
{
    move |a: &C, b: &C| locale_cmp_ci(name(a).unwrap_or(""), name(b).unwrap_or(""))
}

/// Highest score first, then alphabetical.
pub fn score_desc_then_alpha<C, K, S, N>(score: S, name: N) -> impl Fn(&C, &C) -> Ordering
where
    K: Ord,
    S: Fn(&C) -> K,
    N: for<'c> Fn(&'c C) -> Option<&'c str>,
{
    then(score_desc(score), alpha(name))
}

/// Uses `first`, falling back to `second` on ties.
pub fn then<C, A, B>(first: A, second: B) -> impl Fn(&C, &C) -> Ordering
where
    A: Fn(&C, &C) -> Ordering,
    B: Fn(&C, &C) -> Ordering,
{
    move |a: &C, b: &C| first(a, b).then_with(|| second(a, b))
}

/// Flips an ordering.
pub fn reversed<C, A>(cmp: A) -> impl Fn(&C, &C) -> Ordering
where
    A: Fn(&C, &C) -> Ordering,
{
    move |a: &C, b: &C| cmp(a, b).reverse()
}
