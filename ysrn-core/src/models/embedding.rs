//! Vector checks shared by every component that reads embeddings.
//!
//! Vectors are never truncated or padded: a dimension mismatch is an error.

use crate::constants::ZERO_NORM_EPSILON;
use crate::errors::ValidationError;

/// Validate a vector and return its L2 norm.
///
/// Fails on empty input, non-finite components, or a zero norm.
pub fn validated_norm(role: &str, vector: &[f32]) -> Result<f64, ValidationError> {
    if vector.is_empty() {
        return Err(ValidationError::EmptyVector { role: role.into() });
    }
    let mut sum_sq = 0.0f64;
    for x in vector {
        if !x.is_finite() {
            return Err(ValidationError::NonFiniteValue { role: role.into() });
        }
        let x = *x as f64;
        sum_sq += x * x;
    }
    let norm = sum_sq.sqrt();
    if norm <= ZERO_NORM_EPSILON {
        return Err(ValidationError::ZeroVector { role: role.into() });
    }
    Ok(norm)
}

/// Require `actual == expected`.
pub fn check_dimensions(role: &str, expected: usize, actual: usize) -> Result<(), ValidationError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ValidationError::DimensionMismatch {
            role: role.into(),
            expected,
            actual,
        })
    }
}
