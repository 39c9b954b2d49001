//! Vector math shared by the coverage model and the analysis report.

use thiserror::Error;


/// Dimension validation failure for a run's vectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// The reference vector has no components.
    #[error("reference embedding is empty")]
    EmptyReference,

    /// A candidate embedding does not match the reference dimension.
    #[error("dimension mismatch for candidate {index}: expected {expected}, got {actual}")]
    Mismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Cosine similarity of two equal-length vectors.
///
/// Returns `0.0` when either norm is zero (a zero vector is dissimilar to everything,
/// itself included), and when the slices are empty or differ in length.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
            (dot + av * bv, na + av * av, nb + bv * bv)
        });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Checks that every embedding has the reference's dimension.
pub fn validate_dimensions<E: AsRef<[f32]>>(
    reference: &[f32],
    embeddings: &[E],
) -> Result<(), DimensionError> {
    if reference.is_empty() {
        return Err(DimensionError::EmptyReference);
    }

    let expected = reference.len();
    for (index, embedding) in embeddings.iter().enumerate() {
        let actual = embedding.as_ref().len();
        if actual != expected {
            return Err(DimensionError::Mismatch {
                index,
                expected,
                actual,
            });
        }
    }

    Ok(())
}
