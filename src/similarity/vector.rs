// Dot product and cosine similarity over term frequency vectors.
//
// Vectors are sparse: a key missing from a map has count zero. The cosine
// score is
//
//   dot(a, b) / (|a| * |b|)
//
// Counts are never negative, so the score is in [0.0, 1.0]: 0.0 for no
// shared n-grams, 1.0 for vectors pointing the same way.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Result, SimilarityError};

/// Sum of `a[k] * b[k]` over keys present in both maps.
///
/// Keys present in only one map contribute nothing. Commutative; iterates
/// whichever map is smaller.
pub fn dot_product<K>(a: &HashMap<K, usize>, b: &HashMap<K, usize>) -> f64
where
    K: Hash + Eq,
{
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    small
        .iter()
        .filter_map(|(key, &count)| large.get(key).map(|&other| count as f64 * other as f64))
        .sum()
}

/// Cosine similarity between two frequency vectors.
///
/// Returns `SimilarityError::ZeroNorm` when either vector is empty (or all
/// zeros) instead of dividing by zero.
pub fn cosine_similarity<K>(a: &HashMap<K, usize>, b: &HashMap<K, usize>) -> Result<f64>
where
    K: Hash + Eq,
{
    let norm_sq_a = dot_product(a, a);
    let norm_sq_b = dot_product(b, b);

    if norm_sq_a == 0.0 || norm_sq_b == 0.0 {
        return Err(SimilarityError::ZeroNorm);
    }

    // sqrt(|a|^2 * |b|^2) == |a| * |b|, but is exact for a == b.
    let denom = (norm_sq_a * norm_sq_b).sqrt();
    Ok((dot_product(a, b) / denom).clamp(0.0, 1.0))
}
