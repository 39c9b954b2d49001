use std::collections::HashSet;
use std::time::Duration;

use super::*;
use crate::coverage::CoverageModel;

fn two_pairs() -> Vec<Vec<f32>> {
    vec![
        vec![1.0, 0.05],
        vec![1.0, -0.05],
        vec![0.05, 1.0],
        vec![-0.05, 1.0],
    ]
}

fn pseudo_random_embeddings(n: usize, dim: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            (0..dim)
                .map(|_| {
                    state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    (state >> 40) as f32 / (1u64 << 24) as f32
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_diversity_picks_one_per_pair() {
    let embeddings = two_pairs();
    let model = CoverageModel::new(&[1.0, 0.0], &embeddings, 0.3).unwrap();

    // The x-aligned pair is far more relevant individually.
    assert!(model.relevance(0) > model.relevance(2));
    assert!(model.relevance(1) > model.relevance(3));

    let outcome = lazy_greedy_select(&model, 2, &SelectorConfig::default()).unwrap();
    assert_eq!(outcome.len(), 2);

    let from_x_pair = outcome.indices.iter().filter(|&&i| i < 2).count();
    let from_y_pair = outcome.indices.iter().filter(|&&i| i >= 2).count();
    assert_eq!(from_x_pair, 1, "selection: {:?}", outcome.indices);
    assert_eq!(from_y_pair, 1, "selection: {:?}", outcome.indices);
}

#[test]
fn test_k_one_matches_brute_force_argmax() {
    for seed in [1, 2, 3, 4, 5] {
        let embeddings = pseudo_random_embeddings(15, 8, seed);
        let reference = pseudo_random_embeddings(1, 8, seed + 100).remove(0);
        let model = CoverageModel::new(&reference, &embeddings, 0.3).unwrap();

        let gains: Vec<f32> = (0..model.len()).map(|i| model.marginal_gain(i, &[])).collect();
        let best_gain = gains.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        let outcome = lazy_greedy_select(&model, 1, &SelectorConfig::default()).unwrap();
        assert_eq!(outcome.len(), 1);
        assert_eq!(gains[outcome.indices[0]], best_gain);
    }
}

#[test]
fn test_lazy_matches_eager() {
    for seed in [7, 21, 42] {
        let embeddings = pseudo_random_embeddings(25, 6, seed);
        let reference = pseudo_random_embeddings(1, 6, seed * 3).remove(0);
        let model = CoverageModel::new(&reference, &embeddings, 0.3).unwrap();

        for k in [1, 3, 8, 25] {
            let lazy = lazy_greedy_select(&model, k, &SelectorConfig::default()).unwrap();
            let eager = eager_greedy_select(&model, k, &SelectorConfig::default()).unwrap();
            assert_eq!(lazy.indices, eager.indices, "seed {seed}, k {k}");
            assert!(lazy.evaluations <= eager.evaluations + model.len());
        }
    }
}

#[test]
fn test_lazy_saves_evaluations() {
    let embeddings = pseudo_random_embeddings(60, 8, 9);
    let reference = pseudo_random_embeddings(1, 8, 10).remove(0);
    let model = CoverageModel::new(&reference, &embeddings, 0.3).unwrap();

    let lazy = lazy_greedy_select(&model, 10, &SelectorConfig::default()).unwrap();
    let eager = eager_greedy_select(&model, 10, &SelectorConfig::default()).unwrap();
    assert!(
        lazy.evaluations < eager.evaluations,
        "lazy {} vs eager {}",
        lazy.evaluations,
        eager.evaluations
    );
}

#[test]
fn test_exhaustive_selection_is_permutation() {
    let embeddings = pseudo_random_embeddings(12, 4, 5);
    let reference = vec![0.2, 0.4, 0.6, 0.8];
    let model = CoverageModel::new(&reference, &embeddings, 0.3).unwrap();

    let outcome = lazy_greedy_select(&model, 12, &SelectorConfig::default()).unwrap();
    assert_eq!(outcome.len(), 12);

    let unique: HashSet<usize> = outcome.indices.iter().copied().collect();
    assert_eq!(unique.len(), 12);
    assert!(unique.iter().all(|&i| i < 12));
}

#[test]
fn test_gains_are_non_increasing() {
    let embeddings = pseudo_random_embeddings(20, 5, 77);
    let reference = pseudo_random_embeddings(1, 5, 78).remove(0);
    let model = CoverageModel::new(&reference, &embeddings, 0.3).unwrap();

    let outcome = lazy_greedy_select(&model, 20, &SelectorConfig::default()).unwrap();
    for pair in outcome.gains.windows(2) {
        assert!(pair[0] + 1e-5 >= pair[1], "gains: {:?}", outcome.gains);
    }
}

#[test]
fn test_total_gain_matches_objective() {
    let embeddings = pseudo_random_embeddings(10, 4, 31);
    let reference = vec![0.9, 0.1, 0.1, 0.4];
    let model = CoverageModel::new(&reference, &embeddings, 0.3).unwrap();

    let outcome = lazy_greedy_select(&model, 4, &SelectorConfig::default()).unwrap();
    let objective = model.objective(&outcome.indices);
    assert!((outcome.total_gain() - objective).abs() < 1e-4);
}

#[test]
fn test_zero_budget_selects_nothing() {
    let embeddings = two_pairs();
    let model = CoverageModel::new(&[1.0, 0.0], &embeddings, 0.3).unwrap();

    let outcome = lazy_greedy_select(&model, 0, &SelectorConfig::default()).unwrap();
    assert!(outcome.is_empty());
    assert_eq!(outcome.evaluations, 4);
}

#[test]
fn test_budget_larger_than_pool_fails() {
    let embeddings = two_pairs();
    let model = CoverageModel::new(&[1.0, 0.0], &embeddings, 0.3).unwrap();

    let err = lazy_greedy_select(&model, 5, &SelectorConfig::default()).unwrap_err();
    assert_eq!(
        err,
        SelectionError::PoolExhausted {
            requested: 5,
            available: 4
        }
    );

    let err = eager_greedy_select(&model, 5, &SelectorConfig::default()).unwrap_err();
    assert!(matches!(err, SelectionError::PoolExhausted { .. }));
}

#[test]
fn test_deadline_exceeded_between_iterations() {
    let embeddings = pseudo_random_embeddings(200, 16, 13);
    let reference = pseudo_random_embeddings(1, 16, 14).remove(0);
    let model = CoverageModel::new(&reference, &embeddings, 0.3).unwrap();

    let config = SelectorConfig::with_deadline(Duration::ZERO);
    let err = lazy_greedy_select(&model, 5, &config).unwrap_err();
    assert!(matches!(
        err,
        SelectionError::DeadlineExceeded { requested: 5, .. }
    ));
}

#[test]
fn test_generous_deadline_completes() {
    let embeddings = two_pairs();
    let model = CoverageModel::new(&[1.0, 0.0], &embeddings, 0.3).unwrap();

    let config = SelectorConfig::with_deadline(Duration::from_secs(60));
    let outcome = lazy_greedy_select(&model, 3, &config).unwrap();
    assert_eq!(outcome.len(), 3);
}
