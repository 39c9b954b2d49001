use std::time::Instant;

use tracing::{debug, trace};

use crate::coverage::CoverageModel;
use crate::queue::{LazyQueue, QueueEntry};

use super::error::SelectionError;
use super::types::{SelectionOutcome, SelectorConfig};

/// Selects `k` candidates by lazy greedy maximization of the coverage objective.
///
/// Fails with [`SelectionError::PoolExhausted`] when `k` exceeds the pool size, before any
/// gain is computed.
pub fn lazy_greedy_select(
    model: &CoverageModel<'_>,
    k: usize,
    config: &SelectorConfig,
) -> Result<SelectionOutcome, SelectionError> {
    let n = model.len();
    if k > n {
        return Err(SelectionError::PoolExhausted {
            requested: k,
            available: n,
        });
    }

    let started = Instant::now();

    let mut queue = LazyQueue::with_capacity(n);
    for candidate in 0..n {
        queue.insert(QueueEntry::new(model.marginal_gain(candidate, &[]), 0, candidate));
    }
    let mut evaluations = n;

    let mut selection: Vec<usize> = Vec::with_capacity(k);
    let mut gains: Vec<f32> = Vec::with_capacity(k);

    for iteration in 0..k {
        check_deadline(config, started, selection.len(), k)?;

        loop {
            let entry = queue
                .extract_min()
                .ok_or(SelectionError::PoolExhausted {
                    requested: k,
                    available: selection.len(),
                })?;

            if entry.is_current(iteration) {
                trace!(
                    iteration,
                    candidate = entry.candidate(),
                    gain = entry.gain(),
                    "Accepted candidate"
                );
                selection.push(entry.candidate());
                gains.push(entry.gain());
                break;
            }

            // Stale: the stored gain is only an upper bound now.
            let gain = model.marginal_gain(entry.candidate(), &selection);
            evaluations += 1;
            queue.insert(QueueEntry::new(gain, iteration, entry.candidate()));
        }
    }

    debug!(
        k,
        candidates = n,
        evaluations,
        eager_evaluations = eager_evaluation_count(n, k),
        elapsed_us = started.elapsed().as_micros() as u64,
        "Lazy greedy selection complete"
    );

    Ok(SelectionOutcome {
        indices: selection,
        gains,
        evaluations,
    })
}

/// Reference selector that recomputes every remaining gain on every iteration.
///
/// Ties go to the lowest candidate index. Same failure modes as [`lazy_greedy_select`].
pub fn eager_greedy_select(
    model: &CoverageModel<'_>,
    k: usize,
    config: &SelectorConfig,
) -> Result<SelectionOutcome, SelectionError> {
    let n = model.len();
    if k > n {
        return Err(SelectionError::PoolExhausted {
            requested: k,
            available: n,
        });
    }

    let started = Instant::now();
    let mut taken = vec![false; n];
    let mut selection: Vec<usize> = Vec::with_capacity(k);
    let mut gains: Vec<f32> = Vec::with_capacity(k);
    let mut evaluations = 0;

    for _ in 0..k {
        check_deadline(config, started, selection.len(), k)?;

        let mut best: Option<(usize, f32)> = None;
        for candidate in (0..n).filter(|&c| !taken[c]) {
            let gain = model.marginal_gain(candidate, &selection);
            evaluations += 1;
            if best.is_none_or(|(_, best_gain)| gain > best_gain) {
                best = Some((candidate, gain));
            }
        }

        let (candidate, gain) = best.ok_or(SelectionError::PoolExhausted {
            requested: k,
            available: selection.len(),
        })?;
        taken[candidate] = true;
        selection.push(candidate);
        gains.push(gain);
    }

    debug!(k, candidates = n, evaluations, "Eager greedy selection complete");

    Ok(SelectionOutcome {
        indices: selection,
        gains,
        evaluations,
    })
}

fn check_deadline(
    config: &SelectorConfig,
    started: Instant,
    selected: usize,
    requested: usize,
) -> Result<(), SelectionError> {
    match config.deadline {
        Some(deadline) if started.elapsed() >= deadline => Err(SelectionError::DeadlineExceeded {
            selected,
            requested,
            elapsed_ms: started.elapsed().as_millis(),
        }),
        _ => Ok(()),
    }
}

/// Evaluations eager greedy would need for the same run.
fn eager_evaluation_count(n: usize, k: usize) -> usize {
    (0..k).map(|t| n - t).sum()
}
