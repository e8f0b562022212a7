//! Property-based tests for triage and ranking using proptest.

use std::cell::Cell;

use proptest::prelude::*;
use tabula_collate::contains_ci;
use tabula_rank::{triage_str, RankedMatcher};

#[derive(Debug, Clone)]
struct Entry {
    id: usize,
    name: String,
    alias: String,
    weight: u8,
}

fn entries_strategy() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(("[a-dA-D]{0,5}", "[a-dA-D]{0,5}", any::<u8>()), 0..30).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(id, (name, alias, weight))| Entry {
                id,
                name,
                alias,
                weight,
            })
            .collect()
    })
}

fn ids(entries: &[&Entry]) -> Vec<usize> {
    entries.iter().map(|e| e.id).collect()
}

proptest! {
    /// Triage is a stable partition decided by case-insensitive containment.
    #[test]
    fn triage_is_stable_partition(
        words in prop::collection::vec("[a-cA-C]{0,4}", 0..30),
        query in "[a-cA-C]{0,2}",
    ) {
        let part = triage_str(&query, &words);
        prop_assert_eq!(part.len(), words.len());
        prop_assert!(part.matches.iter().all(|w| contains_ci(w, &query)));
        prop_assert!(part.rest.iter().all(|w| !contains_ci(w, &query)));

        let position = |w: &&String| words.iter().position(|x| std::ptr::eq(x, *w));
        let matched: Vec<_> = part.matches.iter().map(position).collect();
        let rest: Vec<_> = part.rest.iter().map(position).collect();
        prop_assert!(matched.windows(2).all(|p| p[0] < p[1]));
        prop_assert!(rest.windows(2).all(|p| p[0] < p[1]));
    }

    /// Ranking without a cap returns every candidate exactly once.
    #[test]
    fn rank_is_a_permutation(entries in entries_strategy(), query in "[a-d]{0,2}") {
        let ranked = RankedMatcher::new(query.as_str())
            .field(|e: &Entry| Some(e.name.as_str()))
            .field(|e: &Entry| Some(e.alias.as_str()))
            .order_by(|a: &Entry, b: &Entry| b.weight.cmp(&a.weight))
            .rank(&entries);

        let mut got = ids(&ranked);
        got.sort_unstable();
        prop_assert_eq!(got, (0..entries.len()).collect::<Vec<_>>());
    }

    /// Every name match precedes every alias-only match, which precedes the rest.
    #[test]
    fn buckets_respect_priority(entries in entries_strategy(), query in "[a-d]{1,2}") {
        let ranked = RankedMatcher::new(query.as_str())
            .field(|e: &Entry| Some(e.name.as_str()))
            .field(|e: &Entry| Some(e.alias.as_str()))
            .order_by(|a: &Entry, b: &Entry| a.weight.cmp(&b.weight))
            .rank(&entries);

        let tier = |e: &Entry| {
            if contains_ci(&e.name, &query) {
                0
            } else if contains_ci(&e.alias, &query) {
                1
            } else {
                2
            }
        };
        let tiers: Vec<u8> = ranked.iter().map(|e| tier(e)).collect();
        prop_assert!(tiers.windows(2).all(|w| w[0] <= w[1]));

        for pair in ranked.windows(2) {
            if tier(pair[0]) == tier(pair[1]) {
                prop_assert!(pair[0].weight <= pair[1].weight);
            }
        }
    }

    /// A cap keeps a prefix of the uncapped ranking.
    #[test]
    fn cap_is_a_prefix(entries in entries_strategy(), query in "[a-d]{0,2}", cap in 0usize..10) {
        let build = || {
            RankedMatcher::new(query.as_str())
                .field(|e: &Entry| Some(e.name.as_str()))
                .order_by(|a: &Entry, b: &Entry| a.weight.cmp(&b.weight))
        };
        let full = ids(&build().rank(&entries));
        let capped = ids(&build().max_items(cap).rank(&entries));

        prop_assert_eq!(capped.len(), cap.min(entries.len()));
        prop_assert_eq!(&capped[..], &full[..capped.len()]);
    }

    /// The comparator never sees candidates from a bucket past the cap.
    #[test]
    fn cap_limits_comparator_calls(entries in entries_strategy(), query in "[a-d]{1,2}") {
        let name_matches = entries.iter().filter(|e| contains_ci(&e.name, &query)).count();
        prop_assume!(name_matches > 0);

        let leaked = Cell::new(false);
        let ranked = RankedMatcher::new(query.as_str())
            .field(|e: &Entry| Some(e.name.as_str()))
            .order_by(|a: &Entry, b: &Entry| {
                if !contains_ci(&a.name, &query) || !contains_ci(&b.name, &query) {
                    leaked.set(true);
                }
                a.weight.cmp(&b.weight)
            })
            .max_items(name_matches)
            .rank(&entries);

        prop_assert_eq!(ranked.len(), name_matches);
        prop_assert!(!leaked.get());
    }
}
