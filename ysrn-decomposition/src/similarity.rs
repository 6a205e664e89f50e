//! Cosine similarity with strict input checks.

use ysrn_core::errors::ValidationError;
use ysrn_core::models::embedding::{check_dimensions, validated_norm};

/// Cosine similarity of two equal-length, non-zero vectors, in [-1.0, 1.0].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, ValidationError> {
    let norm_a = validated_norm("query", a)?;
    check_dimensions("context", a.len(), b.len())?;
    let norm_b = validated_norm("context", b)?;
    Ok(cosine_with_norms(a, b, norm_a, norm_b))
}

/// Cosine similarity when both norms are already known to be non-zero
/// and the lengths already match.
pub fn cosine_with_norms(a: &[f32], b: &[f32], norm_a: f64, norm_b: f64) -> f64 {
    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| *x as f64 * *y as f64)
        .sum();
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Map a cosine in [-1, 1] into [0, 1].
pub fn to_unit_interval(similarity: f64) -> f64 {
    ((similarity + 1.0) / 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![1.0, 2.0, 3.0];
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(sim.abs() < 1e-9);
    }

    #[test]
    fn opposite_vectors_have_similarity_minus_one() {
        let sim = cosine_similarity(&[1.0, 1.0], &[-2.0, -2.0]).unwrap();
        assert!((sim + 1.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = cosine_similarity(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ValidationError::DimensionMismatch { expected: 1, actual: 2, .. }));
    }

    #[test]
    fn zero_vectors_are_rejected() {
        assert!(matches!(
            cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]),
            Err(ValidationError::ZeroVector { .. })
        ));
        assert!(matches!(
            cosine_similarity(&[1.0, 0.0], &[0.0, 0.0]),
            Err(ValidationError::ZeroVector { .. })
        ));
    }

    #[test]
    fn unit_mapping() {
        assert_eq!(to_unit_interval(-1.0), 0.0);
        assert_eq!(to_unit_interval(0.0), 0.5);
        assert_eq!(to_unit_interval(1.0), 1.0);
    }
}
