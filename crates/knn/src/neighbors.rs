//! Brute-force nearest-neighbor search over labeled training rows.

use std::cmp::Ordering;

use crate::distance::euclidean;
use crate::error::KnnError;

/// Returns the `k` training rows closest to `query`, nearest first.
///
/// Each training row carries its label code in the last position; distances
/// are computed over the feature slice only, so `query` must be a bare
/// feature vector of length `row.len() - 1`. Returned rows are full rows,
/// label included.
///
/// Uses a full stable sort on (distance, index) pairs — efficient and
/// cache-friendly for the small datasets this crate targets. Ties in
/// distance keep the original row order.
///
/// # Errors
///
/// Returns [`KnnError::InvalidK`] if `k` is zero,
/// [`KnnError::InsufficientData`] if `k` exceeds the number of training
/// rows, and propagates distance errors for empty or mismatched vectors.
pub fn k_nearest<'a>(
    training: &'a [Vec<f64>],
    query: &[f64],
    k: usize,
) -> Result<Vec<&'a [f64]>, KnnError> {
    if k < 1 {
        return Err(KnnError::InvalidK { k });
    }
    if k > training.len() {
        return Err(KnnError::InsufficientData {
            k,
            available: training.len(),
        });
    }

    let mut pairs: Vec<(f64, usize)> = Vec::with_capacity(training.len());
    for (i, row) in training.iter().enumerate() {
        let features = &row[..row.len().saturating_sub(1)];
        let dist = euclidean(query, features)?;
        pairs.push((dist, i));
    }

    // Stable sort: equal distances keep original row order.
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    pairs.truncate(k);

    Ok(pairs
        .into_iter()
        .map(|(_, i)| training[i].as_slice())
        .collect())
}
