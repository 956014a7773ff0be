use proptest::prelude::*;
use u_delphi::analysis::{
    calculate_consensus, calculate_distance, defuzzify, rank_items, DelphiConfig, DelphiRunner,
};
use u_delphi::data::{ItemValues, RatingMatrix};
use u_delphi::scale::{map_to_fuzzy, LikertScale};

fn scale_strategy() -> impl Strategy<Value = LikertScale> {
    prop_oneof![Just(LikertScale::Five), Just(LikertScale::Seven)]
}

/// Matrices with up to 8 experts and 6 items; cells may be missing or out
/// of domain.
fn matrix_strategy() -> impl Strategy<Value = RatingMatrix> {
    (1usize..=8, 1usize..=6).prop_flat_map(|(experts, items)| {
        prop::collection::vec(
            prop::collection::vec(prop::option::weighted(0.85, -1i32..=8), items),
            experts,
        )
        .prop_map(move |rows| {
            let names: Vec<String> = (1..=items).map(|i| format!("Q{i}")).collect();
            RatingMatrix::from_rows(names, rows).unwrap()
        })
    })
}

// ── Distance ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn unanimous_item_has_zero_distance(
        scale in scale_strategy(),
        rating in 1i32..=7,
        experts in 1usize..30,
    ) {
        let rating = rating.min(scale.points() as i32);
        let ratings = RatingMatrix::from_columns([("Q", vec![Some(rating); experts])]).unwrap();
        let distances = calculate_distance(&map_to_fuzzy(&ratings, scale));
        for d in &distances.columns()[0].distances {
            prop_assert_eq!(*d, Some(0.0));
        }
    }

    #[test]
    fn distances_are_non_negative_and_bounded(
        ratings in matrix_strategy(),
        scale in scale_strategy(),
    ) {
        let distances = calculate_distance(&map_to_fuzzy(&ratings, scale));
        for col in distances.columns() {
            for d in col.distances.iter().flatten() {
                prop_assert!(*d >= 0.0 && *d <= 1.0, "distance {}", d);
            }
        }
    }
}

// ── Consensus ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn consensus_monotonic_in_threshold(
        ratings in matrix_strategy(),
        scale in scale_strategy(),
        t1 in 0.0f64..1.0,
        t2 in 0.0f64..1.0,
    ) {
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let distances = calculate_distance(&map_to_fuzzy(&ratings, scale));
        let c_lo = calculate_consensus(&distances, lo).unwrap();
        let c_hi = calculate_consensus(&distances, hi).unwrap();
        for (a, b) in c_lo.values().zip(c_hi.values()) {
            prop_assert!(b >= a);
            prop_assert!(*a >= 0.0 && *b <= 100.0);
        }
    }
}

// ── Defuzzification ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn crisp_values_within_unit_interval(
        ratings in matrix_strategy(),
        scale in scale_strategy(),
    ) {
        let crisp = defuzzify(&map_to_fuzzy(&ratings, scale));
        for v in crisp.values().flatten() {
            prop_assert!((0.0..=1.0).contains(v), "crisp {}", v);
        }
    }
}

// ── Ranking ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn distinct_values_rank_as_permutation(
        values in prop::collection::hash_set(0u32..10_000, 1..25),
    ) {
        let crisp: ItemValues<Option<f64>> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("I{i}"), Some(*v as f64 / 10_000.0)))
            .collect();
        let mut ranks: Vec<f64> = rank_items(&crisp).values().map(|r| r.unwrap()).collect();
        ranks.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected: Vec<f64> = (1..=values.len()).map(|r| r as f64).collect();
        prop_assert_eq!(ranks, expected);
    }

    #[test]
    fn tied_ranks_preserve_rank_sum(
        values in prop::collection::vec(prop::option::of(0u32..5), 1..25),
    ) {
        let crisp: ItemValues<Option<f64>> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("I{i}"), v.map(|x| x as f64 / 4.0)))
            .collect();
        let ranks = rank_items(&crisp);
        let ranked: Vec<f64> = ranks.values().flatten().copied().collect();
        let n = values.iter().flatten().count();
        prop_assert_eq!(ranked.len(), n);
        let sum: f64 = ranked.iter().sum();
        prop_assert!((sum - (n * (n + 1)) as f64 / 2.0).abs() < 1e-9);

        // Higher value never ranks behind a lower one.
        for (a, ra) in crisp.values().zip(ranks.values()) {
            for (b, rb) in crisp.values().zip(ranks.values()) {
                if let (Some(a), Some(b), Some(ra), Some(rb)) = (a, b, ra, rb) {
                    if a > b {
                        prop_assert!(ra < rb);
                    }
                }
            }
        }
    }
}

// ── Whole pipeline ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn runs_are_deterministic(
        ratings in matrix_strategy(),
        scale in scale_strategy(),
    ) {
        let config = DelphiConfig::default().with_scale(scale);
        let a = DelphiRunner::run(&ratings, &config).unwrap();
        let b = DelphiRunner::run(&ratings, &config.clone().with_parallel(true)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn result_shape_matches_input(ratings in matrix_strategy()) {
        let result = DelphiRunner::run(&ratings, &DelphiConfig::default()).unwrap();
        prop_assert_eq!(result.items.len(), ratings.item_count());
        prop_assert_eq!(result.distances.experts(), ratings.experts());
        prop_assert_eq!(result.fuzzy.item_count(), ratings.item_count());
        for (summary, name) in result.items.iter().zip(ratings.items()) {
            prop_assert_eq!(&summary.item, name);
        }
    }
}
