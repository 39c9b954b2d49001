use tracing::debug;

use crate::vector::{cosine_similarity, validate_dimensions};

use super::error::CoverageError;

/// Relevance baseline plus marginal-gain evaluation for one selection run.
///
/// Borrows the candidate embeddings; relevance scores are computed once in
/// [`CoverageModel::new`] and never change afterwards.
#[derive(Debug, Clone)]
pub struct CoverageModel<'a> {
    embeddings: &'a [Vec<f32>],
    relevance: Vec<f32>,
    alpha: f32,
}

impl<'a> CoverageModel<'a> {
    /// Builds the model, validating dimensions and `alpha`.
    pub fn new(
        reference: &[f32],
        embeddings: &'a [Vec<f32>],
        alpha: f32,
    ) -> Result<Self, CoverageError> {
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(CoverageError::InvalidAlpha { alpha });
        }

        validate_dimensions(reference, embeddings)?;

        let relevance: Vec<f32> = embeddings
            .iter()
            .map(|embedding| cosine_similarity(reference, embedding))
            .collect();

        debug!(
            candidates = embeddings.len(),
            dim = reference.len(),
            alpha,
            "Coverage model initialized"
        );

        Ok(Self {
            embeddings,
            relevance,
            alpha,
        })
    }

    /// Number of candidates in the pool.
    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Similarity of candidate `index` to the reference embedding.
    pub fn relevance(&self, index: usize) -> f32 {
        self.relevance[index]
    }

    pub fn relevance_scores(&self) -> &[f32] {
        &self.relevance
    }

    /// Pairwise similarity between two candidates.
    #[inline]
    pub fn similarity(&self, a: usize, b: usize) -> f32 {
        cosine_similarity(&self.embeddings[a], &self.embeddings[b])
    }

    /// Coverage of candidate `j` under `selection`.
    fn coverage_of(&self, j: usize, selection: &[usize]) -> f32 {
        selection
            .iter()
            .map(|&s| self.similarity(s, j))
            .fold(self.alpha * self.relevance[j], f32::max)
    }

    /// Gain of adding candidate `index` to `selection`.
    ///
    /// For an empty selection this is the full objective of `{index}` (with `F(∅) = 0`),
    /// not a difference of two sums. Otherwise it is `Σ_j new_j − Σ_j cur_j` where `cur_j`
    /// is the coverage under `selection` and `new_j = max(cur_j, sim(index, j))`.
    ///
    /// Costs `O(n · |selection|)`; nothing is cached between calls.
    pub fn marginal_gain(&self, index: usize, selection: &[usize]) -> f32 {
        debug_assert!(index < self.len(), "candidate index out of range");

        if selection.is_empty() {
            return (0..self.len())
                .map(|j| (self.alpha * self.relevance[j]).max(self.similarity(index, j)))
                .sum();
        }

        let (current_total, new_total) =
            (0..self.len()).fold((0.0f32, 0.0f32), |(current_total, new_total), j| {
                let current = self.coverage_of(j, selection);
                let updated = current.max(self.similarity(index, j));
                (current_total + current, new_total + updated)
            });

        new_total - current_total
    }

    /// Objective value `F(selection)`, with `F(∅) = 0`.
    pub fn objective(&self, selection: &[usize]) -> f32 {
        if selection.is_empty() {
            return 0.0;
        }

        (0..self.len()).map(|j| self.coverage_of(j, selection)).sum()
    }
}
