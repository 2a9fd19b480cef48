//! Label prediction by majority vote over the k nearest neighbors.

use crate::error::KnnError;
use crate::neighbors::k_nearest;
use crate::vote::majority_label;

/// Predicts the label code for `query` from its `k` nearest training rows.
///
/// `query` is a bare feature vector; each training row carries its label
/// code in the last position. The prediction is the most frequent label
/// among the k neighbors, with ties going to the label of the closer
/// neighbor (see [`majority_label`]).
///
/// # Errors
///
/// Propagates [`KnnError`] from the neighbor search: invalid or oversized
/// `k`, empty vectors, or dimension mismatches.
pub fn predict(training: &[Vec<f64>], query: &[f64], k: usize) -> Result<f64, KnnError> {
    let neighbors = k_nearest(training, query, k)?;
    let labels: Vec<f64> = neighbors.iter().map(|row| row[row.len() - 1]).collect();

    // k_nearest guarantees at least one neighbor for k >= 1.
    majority_label(&labels).ok_or(KnnError::InsufficientData { k, available: 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two well-separated 2-D clusters, label codes 0.0 and 1.0.
    fn two_clusters() -> Vec<Vec<f64>> {
        vec![
            vec![2.7810836, 2.550537003, 0.0],
            vec![1.465489372, 2.362125076, 0.0],
            vec![3.396561688, 4.400293529, 0.0],
            vec![1.38807019, 1.850220317, 0.0],
            vec![3.06407232, 3.005305973, 0.0],
            vec![7.627531214, 2.759262235, 1.0],
            vec![5.332441248, 2.088626775, 1.0],
            vec![6.922596716, 1.77106367, 1.0],
            vec![8.675418651, -0.242068655, 1.0],
            vec![7.673756466, 3.508563011, 1.0],
        ]
    }

    #[test]
    fn test_predicts_own_cluster() {
        let rows = two_clusters();
        assert_eq!(predict(&rows, &[2.7810836, 2.550537003], 3).unwrap(), 0.0);
        assert_eq!(predict(&rows, &[7.673756466, 3.508563011], 3).unwrap(), 1.0);
    }

    #[test]
    fn test_k1_copies_nearest_label() {
        let rows = two_clusters();
        assert_eq!(predict(&rows, &[8.0, 0.0], 1).unwrap(), 1.0);
    }

    #[test]
    fn test_tie_resolved_by_closer_neighbor() {
        // k = 2 over one row of each label; the nearer row wins the tie.
        let rows = vec![vec![0.0, 0.0, 5.0], vec![10.0, 10.0, 6.0]];
        assert_eq!(predict(&rows, &[1.0, 1.0], 2).unwrap(), 5.0);
        assert_eq!(predict(&rows, &[9.0, 9.0], 2).unwrap(), 6.0);
    }

    #[test]
    fn test_error_propagates_from_search() {
        let rows = two_clusters();
        assert!(matches!(
            predict(&rows, &[1.0, 1.0], 11),
            Err(KnnError::InsufficientData {
                k: 11,
                available: 10
            })
        ));
    }
}
