//! Similarity report over a selection (or embedding) artifact.
//!
//! For every `"<n>_queries"` group, ascending by `n`: how close the members stay to the
//! original query, and how close they are to each other. A good selection keeps the first
//! number high while the second drops.

use std::fmt;

use crate::artifact::EmbeddingFile;
use crate::vector::cosine_similarity;


/// Mean and population standard deviation of a set of similarities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityStats {
    pub mean: f32,
    pub std: f32,
}

impl SimilarityStats {
    /// `None` for an empty sample.
    pub fn from_samples(samples: &[f32]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f32;
        let mean = samples.iter().sum::<f32>() / n;
        let variance = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f32>() / n;
        Some(Self {
            mean,
            std: variance.sqrt(),
        })
    }
}

impl fmt::Display for SimilarityStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} ± {:.4}", self.mean, self.std)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupSimilarity {
    pub size: usize,
    /// Similarity of each member to the original query. `None` for an empty group.
    pub to_original: Option<SimilarityStats>,
    /// Pairwise similarity among members. `None` below two members.
    pub within_group: Option<SimilarityStats>,
}

/// Computes per-group statistics for every sized group of `file`.
pub fn analyze_selection(file: &EmbeddingFile) -> Vec<GroupSimilarity> {
    let reference = &file.original_query_embedding;

    file.sized_groups()
        .into_iter()
        .map(|(size, group)| {
            let to_original: Vec<f32> = group
                .iter()
                .map(|embedding| cosine_similarity(reference, embedding))
                .collect();

            let mut pairwise = Vec::with_capacity(group.len() * group.len().saturating_sub(1) / 2);
            for (i, a) in group.iter().enumerate() {
                for b in &group[i + 1..] {
                    pairwise.push(cosine_similarity(a, b));
                }
            }

            GroupSimilarity {
                size,
                to_original: SimilarityStats::from_samples(&to_original),
                within_group: SimilarityStats::from_samples(&pairwise),
            }
        })
        .collect()
}

/// Renders the report as a fixed-width table.
pub fn render_report(report: &[GroupSimilarity]) -> String {
    let mut out = format!(
        "{:>6}  {:>18}  {:>18}\n",
        "group", "vs original", "within group"
    );
    for row in report {
        let to_original = row
            .to_original
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        let within = row
            .within_group
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        out.push_str(&format!(
            "{:>6}  {:>18}  {:>18}\n",
            row.size, to_original, within
        ));
    }
    out
}
