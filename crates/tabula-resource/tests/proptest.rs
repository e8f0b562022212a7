//! Property-based tests for the query engine using proptest.

use proptest::prelude::*;
use tabula_collate::locale_cmp;
use tabula_resource::{DataResource, FieldRegistry, Number, QueryParams};

#[derive(Debug, Clone)]
struct Row {
    id: usize,
    label: String,
    weight: i64,
}

fn fields() -> FieldRegistry<Row> {
    FieldRegistry::new()
        .string("label", |r: &Row| Some(r.label.as_str()))
        .numeric("weight", |r: &Row| Some(r.weight))
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(("[a-cA-C]{0,3}", -5i64..5), 0..40).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(id, (label, weight))| Row { id, label, weight })
            .collect()
    })
}

const BIG: i64 = 1 << 53;

/// Integers and floats around 2^53, where `f64` stops being exact.
fn mixed_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        (-3i64..4).prop_map(|d| Number::I64(BIG + d)),
        (-3i64..4).prop_map(|d| Number::U64((BIG + d) as u64)),
        (-3i64..4).prop_map(|d| Number::F64((BIG + d) as f64)),
        (-3i64..4).prop_map(|d| Number::F64((BIG + d) as f64 + 0.5)),
    ]
}

fn ids(rows: &[&Row]) -> Vec<usize> {
    rows.iter().map(|r| r.id).collect()
}

proptest! {
    /// Without a size, `page` is a raw offset.
    #[test]
    fn raw_offset_matches_skip(rows in rows_strategy(), k in 0usize..50) {
        let fields = fields();
        let resource = DataResource::new(&rows, &fields);

        let got = ids(&resource.query(&QueryParams::new().page(k)));
        let expected: Vec<usize> = rows.iter().skip(k).map(|r| r.id).collect();
        prop_assert_eq!(got, expected);
    }

    /// With a size, page `k` covers `k*s .. k*s + s`.
    #[test]
    fn sized_page_matches_skip_take(rows in rows_strategy(), k in 0usize..10, s in 1usize..8) {
        let fields = fields();
        let resource = DataResource::new(&rows, &fields);

        let got = ids(&resource.query(&QueryParams::new().page(k).size(s)));
        let expected: Vec<usize> = rows.iter().skip(k * s).take(s).map(|r| r.id).collect();
        prop_assert_eq!(got, expected);
    }

    /// Concatenating every page reproduces the full sorted view.
    #[test]
    fn pages_tile_the_result(rows in rows_strategy(), s in 1usize..8) {
        let fields = fields();
        let resource = DataResource::new(&rows, &fields);
        let full = ids(&resource.query(&QueryParams::new().sort_by("label")));

        let pages = QueryParams::new().size(s).page_count(rows.len()).unwrap_or(0);
        let mut tiled = Vec::new();
        for page in 0..pages {
            let params = QueryParams::new().sort_by("label").page(page).size(s);
            tiled.extend(ids(&resource.query(&params)));
        }
        prop_assert_eq!(tiled, full);
    }

    /// Ascending string sort is non-decreasing under locale collation.
    #[test]
    fn ascending_labels_are_ordered(rows in rows_strategy()) {
        let fields = fields();
        let resource = DataResource::new(&rows, &fields);

        let sorted = resource.query(&QueryParams::new().sort_by("label").ascending());
        for pair in sorted.windows(2) {
            prop_assert_ne!(locale_cmp(&pair[0].label, &pair[1].label), std::cmp::Ordering::Greater);
        }
    }

    /// Descending output is exactly the ascending output reversed.
    #[test]
    fn descending_reverses_ascending(rows in rows_strategy()) {
        let fields = fields();
        let resource = DataResource::new(&rows, &fields);

        let mut asc = ids(&resource.query(&QueryParams::new().sort_by("weight")));
        let desc = ids(&resource.query(&QueryParams::new().sort_by("weight").descending()));
        asc.reverse();
        prop_assert_eq!(asc, desc);
    }

    /// Sorting is a permutation and the source is left untouched.
    #[test]
    fn sort_is_a_permutation(rows in rows_strategy()) {
        let fields = fields();
        let resource = DataResource::new(&rows, &fields);
        let before: Vec<usize> = rows.iter().map(|r| r.id).collect();

        let mut sorted = ids(&resource.query(&QueryParams::new().sort_by("weight").descending()));
        sorted.sort_unstable();

        prop_assert_eq!(&sorted, &before);
        prop_assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), before);
        prop_assert_eq!(resource.count(), rows.len());
    }

    /// Filtering never grows the collection and keeps source order.
    #[test]
    fn filter_preserves_order(rows in rows_strategy(), threshold in -5i64..5) {
        let fields = fields();
        let resource = DataResource::new(&rows, &fields);

        let kept = ids(&resource.query_filtered(&QueryParams::new(), |r, _, _| r.weight > threshold));
        prop_assert!(kept.len() <= rows.len());
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
    }

    /// Mixed integer and float comparisons are transitive.
    #[test]
    fn mixed_numbers_are_transitive(a in mixed_number(), b in mixed_number(), c in mixed_number()) {
        use std::cmp::Ordering::Greater;
        if a.sort_cmp(b) != Greater && b.sort_cmp(c) != Greater {
            prop_assert_ne!(a.sort_cmp(c), Greater);
        }
    }

    /// A numeric field mixing integers and floats sorts into a total order.
    #[test]
    fn mixed_numeric_field_is_ordered(values in prop::collection::vec(mixed_number(), 0..30)) {
        let fields = FieldRegistry::new().numeric("value", |n: &Number| Some(*n));
        let resource = DataResource::new(&values, &fields);

        let sorted = resource.query(&QueryParams::new().sort_by("value"));
        for (i, a) in sorted.iter().enumerate() {
            for b in &sorted[i + 1..] {
                prop_assert_ne!(a.sort_cmp(**b), std::cmp::Ordering::Greater);
            }
        }
    }
}
