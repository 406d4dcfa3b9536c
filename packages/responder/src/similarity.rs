//! Cosine similarity and best-match selection over precomputed vectors.

use crate::error::{ResponderError, Result};

/// The winning corpus entry for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Index of the best-matching corpus entry
    pub index: usize,

    /// Cosine similarity of the best match, in [-1, 1]
    pub score: f32,
}

/// Cosine similarity between two vectors.
///
/// Defined as 0.0 when either vector has zero norm, so a degenerate
/// embedding never produces NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Find the corpus vector most similar to the query.
///
/// Scans in order; ties are won by the lowest index. Every vector must
/// share the query's dimensionality.
pub fn best_match(query: &[f32], corpus_vectors: &[Vec<f32>]) -> Result<MatchResult> {
    if corpus_vectors.is_empty() {
        return Err(ResponderError::EmptyCorpus);
    }

    let mut best: Option<MatchResult> = None;
    for (index, vector) in corpus_vectors.iter().enumerate() {
        if vector.len() != query.len() {
            return Err(ResponderError::DimensionMismatch {
                expected: query.len(),
                actual: vector.len(),
            });
        }

        let score = cosine_similarity(query, vector);
        // Strict > keeps the first occurrence on ties.
        if best.map_or(true, |b| score > b.score) {
            best = Some(MatchResult { index, score });
        }
    }

    Ok(best.expect("corpus_vectors is non-empty"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_identical_orthogonal_opposite() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 0.001);

        let c = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &c).abs() < 0.001);

        let d = vec![-1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &d) + 1.0).abs() < 0.001);
    }

    #[test]
    fn cosine_zero_norm_is_zero_not_nan() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![1.0, 2.0, 3.0];
        let score = cosine_similarity(&a, &b);
        assert_eq!(score, 0.0);
        assert!(!score.is_nan());
    }

    #[test]
    fn cosine_is_magnitude_independent() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![2.0, 4.0, 6.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 0.001);
    }

    #[test]
    fn best_match_picks_highest() {
        let vectors = vec![
            vec![0.0, 1.0, 0.0],
            vec![0.9, 0.1, 0.0],
            vec![1.0, 0.0, 0.0],
        ];
        let result = best_match(&[1.0, 0.0, 0.0], &vectors).unwrap();
        assert_eq!(result.index, 2);
        assert!((result.score - 1.0).abs() < 0.001);
    }

    #[test]
    fn best_match_tie_goes_to_first_index() {
        let vectors = vec![
            vec![1.0, 0.0],
            vec![2.0, 0.0], // same direction, same similarity
            vec![0.0, 1.0],
        ];
        let result = best_match(&[1.0, 0.0], &vectors).unwrap();
        assert_eq!(result.index, 0);
    }

    #[test]
    fn best_match_score_in_range() {
        let vectors = vec![vec![-1.0, 2.0, -3.0], vec![4.0, -5.0, 6.0]];
        let result = best_match(&[1.0, 1.0, 1.0], &vectors).unwrap();
        assert!(result.index < vectors.len());
        assert!((-1.0..=1.0).contains(&result.score));
    }

    #[test]
    fn best_match_rejects_dimension_mismatch() {
        let vectors = vec![vec![1.0, 0.0], vec![1.0, 0.0, 0.0]];
        let err = best_match(&[1.0, 0.0], &vectors).unwrap_err();
        assert!(matches!(
            err,
            ResponderError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn best_match_rejects_empty_corpus() {
        let err = best_match(&[1.0, 0.0], &[]).unwrap_err();
        assert!(matches!(err, ResponderError::EmptyCorpus));
    }
}
