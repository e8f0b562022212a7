//! Call-scoped memoization of derived sort keys.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Remembers a derived key per candidate for the duration of one ranking call.
///
/// Comparators run `O(n log n)` times, so an expensive key (a lookup in
/// another table, a computed activity score) is worth deriving once per item.
/// Keys are stored under an id taken from the candidate itself, so the cache
/// stays correct when a sort moves candidates around in memory. Candidates
/// sharing an id share a key.
///
/// Create the cache right before ranking and drop it afterwards. It uses a
/// `RefCell` and is therefore not `Sync`.
///
/// ```
/// use std::cell::Cell;
/// use tabula_rank::{KeyCache, RankedMatcher};
///
/// let calls = Cell::new(0);
/// let cache = KeyCache::new(
///     |word: &&str| word.to_string(),
///     |word: &&str| {
///         calls.set(calls.get() + 1);
///         word.len()
///     },
/// );
///
/// let words = ["kiwi", "fig", "banana", "plum"];
/// let ranked = RankedMatcher::new("")
///     .order_by(|a: &&str, b: &&str| cache.compare(a, b))
///     .rank(&words);
///
/// assert_eq!(ranked, [&"fig", &"kiwi", &"plum", &"banana"]);
/// assert_eq!(calls.get(), words.len());
/// ```
pub struct KeyCache<C, I, K, N, F> {
    id: N,
    derive: F,
    keys: RefCell<HashMap<I, K>>,
    _candidate: PhantomData<fn(&C)>,
}

impl<C, I, K, N, F> KeyCache<C, I, K, N, F>
where
    I: Eq + Hash + Clone,
    N: Fn(&C) -> I,
    F: Fn(&C) -> K,
{
    /// Creates an empty cache. `id` names a candidate; `derive` computes its
    /// key the first time that id is seen.
    pub fn new(id: N, derive: F) -> Self {
        KeyCache {
            id,
            derive,
            keys: RefCell::new(HashMap::new()),
            _candidate: PhantomData,
        }
    }

    /// Returns the key for `item`, deriving it on first use.
    pub fn key(&self, item: &C) -> K
    where
        K: Clone,
    {
        let id = self.ensure(item);
        self.keys.borrow()[&id].clone()
    }

    /// Compares two candidates by their cached keys.
    pub fn compare(&self, a: &C, b: &C) -> Ordering
    where
        K: Ord,
    {
        self.compare_by(a, b, K::cmp)
    }

    /// Compares two candidates' cached keys with `cmp`.
    pub fn compare_by<G>(&self, a: &C, b: &C, cmp: G) -> Ordering
    where
        G: FnOnce(&K, &K) -> Ordering,
    {
        let a = self.ensure(a);
        let b = self.ensure(b);
        let keys = self.keys.borrow();
        cmp(&keys[&a], &keys[&b])
    }

    /// Number of keys derived so far.
    pub fn len(&self) -> usize {
        self.keys.borrow().len()
    }

    /// Returns `true` if no key has been derived yet.
    pub fn is_empty(&self) -> bool {
        self.keys.borrow().is_empty()
    }

    fn ensure(&self, item: &C) -> I {
        let id = (self.id)(item);
        if !self.keys.borrow().contains_key(&id) {
            let key = (self.derive)(item);
            self.keys.borrow_mut().insert(id.clone(), key);
        }
        id
    }
}
