use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use tracing::info;

use crate::constants::DEFAULT_ALPHA;
use crate::coverage::CoverageModel;
use crate::selector::{SelectorConfig, lazy_greedy_select};

use super::budget::BudgetSpec;
use super::error::BatchError;
use super::pool::CandidatePool;

/// One selected candidate, mapped back to its text and embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedQuery {
    /// Index in the candidate pool.
    pub index: usize,
    pub text: String,
    pub embedding: Vec<f32>,
    /// Marginal gain at the time of selection.
    pub gain: f32,
}

/// Selection for a single budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSelection {
    pub k: usize,
    /// Picks in greedy order.
    pub queries: Vec<SelectedQuery>,
    /// Exact gain evaluations spent by the lazy selector.
    pub evaluations: usize,
    pub elapsed: Duration,
}

impl BudgetSelection {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.queries.iter().map(|q| q.text.as_str())
    }

    pub fn indices(&self) -> Vec<usize> {
        self.queries.iter().map(|q| q.index).collect()
    }
}

/// Aggregated output of a batch, keyed by budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub original_query: String,
    pub original_embedding: Vec<f32>,
    pub selections: BTreeMap<usize, BudgetSelection>,
}

impl BatchResult {
    pub fn get(&self, k: usize) -> Option<&BudgetSelection> {
        self.selections.get(&k)
    }

    /// Selections in ascending budget order.
    pub fn iter(&self) -> impl Iterator<Item = &BudgetSelection> {
        self.selections.values()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// Runs one lazy greedy selection per requested budget.
#[derive(Debug, Clone, Copy)]
pub struct BatchDriver {
    alpha: f32,
    selector: SelectorConfig,
}

impl Default for BatchDriver {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            selector: SelectorConfig::default(),
        }
    }
}

impl BatchDriver {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            ..Default::default()
        }
    }

    pub fn with_selector_config(mut self, selector: SelectorConfig) -> Self {
        self.selector = selector;
        self
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Runs every budget in `spec` against `pool`.
    ///
    /// Fails before any selection work if the largest budget exceeds the pool.
    pub fn run(&self, pool: &CandidatePool, spec: BudgetSpec) -> Result<BatchResult, BatchError> {
        if spec.max() > pool.len() {
            return Err(BatchError::PoolTooSmall {
                requested: spec.max(),
                available: pool.len(),
            });
        }

        let model = CoverageModel::new(pool.reference(), pool.embeddings(), self.alpha)?;

        info!(
            budgets = %spec,
            runs = spec.count(),
            candidates = pool.len(),
            dim = pool.dimension(),
            "Starting batch selection"
        );

        let mut selections = BTreeMap::new();
        for k in spec.budgets() {
            let started = Instant::now();
            let outcome = lazy_greedy_select(&model, k, &self.selector)
                .map_err(|source| BatchError::Selection { k, source })?;
            let elapsed = started.elapsed();

            info!(
                k,
                evaluations = outcome.evaluations,
                elapsed_ms = elapsed.as_millis() as u64,
                "Selected queries"
            );

            let queries = outcome
                .indices
                .iter()
                .zip(outcome.gains.iter())
                .map(|(&index, &gain)| SelectedQuery {
                    index,
                    text: pool.texts()[index].clone(),
                    embedding: pool.embeddings()[index].clone(),
                    gain,
                })
                .collect();

            selections.insert(
                k,
                BudgetSelection {
                    k,
                    queries,
                    evaluations: outcome.evaluations,
                    elapsed,
                },
            );
        }

        Ok(BatchResult {
            original_query: pool.original_query().to_string(),
            original_embedding: pool.reference().to_vec(),
            selections,
        })
    }
}
