use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use u_kmove::distance::CostEvaluator;
use u_kmove::models::{BaseMove, Edge, KMove, Point};
use u_kmove::ranking::rank_moves;
use u_kmove::search::{search_combinations, SearchConfig, Strategy as SearchStrategy};
use u_kmove::{combine_moves, CombineOutcome};

fn instance(coords: &[(i32, i32)]) -> Vec<Point> {
    coords
        .iter()
        .map(|&(x, y)| Point::new(x as f64, y as f64))
        .collect()
}

fn build_move(nodes: usize, k: usize, seeds: &[(usize, usize, usize, usize)]) -> BaseMove {
    let edge = |a: usize, b: usize| Edge::new(a % nodes + 1, b % nodes + 1);
    let removed = seeds.iter().take(k).map(|s| edge(s.0, s.1)).collect();
    let added = seeds.iter().take(k).map(|s| edge(s.2, s.3)).collect();
    KMove::new(removed, added)
}

/// Strategy producing an instance and up to 9 balanced moves over it.
fn arb_problem() -> impl Strategy<Value = (Vec<Point>, Vec<BaseMove>)> {
    (
        prop::collection::vec((-50i32..50, -50i32..50), 2..12),
        prop::collection::vec(
            (
                1usize..=3,
                prop::collection::vec((0usize..64, 0usize..64, 0usize..64, 0usize..64), 3),
            ),
            0..9,
        ),
    )
        .prop_map(|(coords, specs)| {
            let points = instance(&coords);
            let moves = specs
                .iter()
                .map(|(k, seeds)| build_move(points.len(), *k, seeds))
                .collect();
            (points, moves)
        })
}

/// All increasing index sets reachable under the pruning rule, in
/// include-first depth-first order.
fn brute_force(gains: &[i64], sizes: &[usize], kmin: usize) -> Vec<Vec<usize>> {
    let n = gains.len();
    let mut found = Vec::new();
    for mask in 1u32..(1 << n) {
        let indices: Vec<usize> = (0..n).filter(|&i| mask & (1 << i) != 0).collect();
        let mut gain = 0;
        let mut reachable = true;
        for &i in &indices {
            if gain + gains[i] <= 0 {
                reachable = false;
                break;
            }
            gain += gains[i];
        }
        let size: usize = indices.iter().map(|&i| sizes[i]).sum();
        if reachable && size >= kmin {
            found.push(indices);
        }
    }
    found.sort();
    found
}

fn run(points: &[Point], moves: &[BaseMove], kmin: usize) -> CombineOutcome {
    combine_moves(points, moves, &SearchConfig::new(kmin)).expect("valid problem")
}

proptest! {
    #[test]
    fn ranking_gains_match_costs_and_descend((points, moves) in arb_problem()) {
        let eval = CostEvaluator::new(&points);
        let ranked = rank_moves(&eval, &moves).unwrap();
        prop_assert_eq!(ranked.len(), moves.len());
        for r in &ranked {
            let expected = eval.edge_set_cost(r.base.removed()).unwrap()
                - eval.edge_set_cost(r.base.added()).unwrap();
            prop_assert_eq!(r.gain, expected);
        }
        for w in ranked.windows(2) {
            prop_assert!(w[0].gain >= w[1].gain);
            if w[0].gain == w[1].gain {
                prop_assert!(w[0].position < w[1].position);
            }
        }
    }

    #[test]
    fn combinations_respect_size_and_prefix_gain(
        (points, moves) in arb_problem(),
        kmin in 1usize..8,
    ) {
        let eval = CostEvaluator::new(&points);
        let ranked = rank_moves(&eval, &moves).unwrap();
        let outcome = search_combinations(&ranked, &SearchConfig::new(kmin)).unwrap();

        for c in &outcome.combinations {
            prop_assert!(c.size >= kmin);
            let size: usize = c.indices.iter().map(|&i| ranked[i].k()).sum();
            prop_assert_eq!(c.size, size);
            prop_assert!(c.indices.windows(2).all(|w| w[0] < w[1]));

            let mut running = 0i64;
            for &i in &c.indices {
                prop_assert!(running + ranked[i].gain > 0);
                running += ranked[i].gain;
            }
            prop_assert_eq!(c.gain, running);
            prop_assert!(c.gain > 0);
        }
        prop_assert_eq!(outcome.stats.recorded, outcome.combinations.len());
    }

    #[test]
    fn search_matches_brute_force(
        gains in prop::collection::vec(-20i64..20, 0..10),
        size_seed in prop::collection::vec(1usize..=3, 10),
        kmin in 1usize..6,
    ) {
        let sizes = &size_seed[..gains.len()];
        let mut sorted = gains.clone();
        sorted.sort_by(|a, b| b.cmp(a));

        let moves: Vec<BaseMove> = sizes
            .iter()
            .map(|&k| build_move(4, k, &[(0, 1, 0, 2), (1, 2, 1, 3), (2, 3, 2, 0)]))
            .collect();
        let ranked: Vec<_> = moves
            .iter()
            .zip(&sorted)
            .enumerate()
            .map(|(position, (base, &gain))| u_kmove::models::RankedMove { base, gain, position })
            .collect();

        let outcome = search_combinations(&ranked, &SearchConfig::new(kmin)).unwrap();
        let got: Vec<Vec<usize>> = outcome.combinations.iter().map(|c| c.indices.clone()).collect();
        prop_assert_eq!(got, brute_force(&sorted, sizes, kmin));
    }

    #[test]
    fn output_moves_are_balanced_and_concatenated(
        (points, moves) in arb_problem(),
        kmin in 1usize..6,
    ) {
        let outcome = run(&points, &moves, kmin);
        prop_assert_eq!(outcome.moves.len(), outcome.combinations.len());
        for (out, c) in outcome.moves.iter().zip(&outcome.combinations) {
            prop_assert!(out.is_balanced());
            prop_assert_eq!(out.k(), c.size);
            let first = &moves[outcome.ranked_positions[c.indices[0]]];
            prop_assert_eq!(&out.removed()[..first.k()], first.removed());
        }
    }

    #[test]
    fn search_is_idempotent_and_strategy_independent(
        (points, moves) in arb_problem(),
        kmin in 1usize..6,
    ) {
        let first = run(&points, &moves, kmin);
        let second = run(&points, &moves, kmin);
        prop_assert_eq!(&first, &second);

        let iterative = combine_moves(
            &points,
            &moves,
            &SearchConfig::new(kmin).with_strategy(SearchStrategy::ExplicitStack),
        )
        .unwrap();
        prop_assert_eq!(&first, &iterative);
    }
}

#[test]
fn seeded_large_instance_strategies_agree() {
    let mut rng = StdRng::seed_from_u64(42);
    let points: Vec<Point> = (0..200)
        .map(|_| Point::new(rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();

    // Disjoint 2-opt style moves over consecutive node blocks.
    let moves: Vec<BaseMove> = (0..16)
        .map(|b| {
            let n = 4 * b + 1;
            KMove::new(
                vec![Edge::new(n, n + 1), Edge::new(n + 2, n + 3)],
                vec![Edge::new(n, n + 2), Edge::new(n + 1, n + 3)],
            )
        })
        .collect();

    let recursive = combine_moves(&points, &moves, &SearchConfig::new(6)).unwrap();
    let iterative = combine_moves(
        &points,
        &moves,
        &SearchConfig::new(6).with_strategy(SearchStrategy::ExplicitStack),
    )
    .unwrap();

    assert_eq!(recursive, iterative);
    assert!(recursive.moves.iter().all(|m| m.is_balanced() && m.k() >= 6));
}
