//! Euclidean distance between feature vectors.

use crate::error::KnnError;

/// Computes the Euclidean distance between two equal-length vectors.
///
/// Both slices are treated as pure feature vectors: every element
/// participates in the sum. Callers that hold rows with a trailing label
/// code pass the feature slice (`&row[..row.len() - 1]`) so the label never
/// enters a distance.
///
/// # Errors
///
/// Returns [`KnnError::EmptyVector`] if either slice is empty, and
/// [`KnnError::LengthMismatch`] if the lengths differ.
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64, KnnError> {
    if a.is_empty() || b.is_empty() {
        return Err(KnnError::EmptyVector);
    }
    if a.len() != b.len() {
        return Err(KnnError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let sum_sq: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum();

    Ok(sum_sq.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identical_vectors_zero() {
        let a = [5.1, 3.5, 1.4, 0.2];
        assert_abs_diff_eq!(euclidean(&a, &a).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let a = [6.3, 2.5, 5.0, 1.9];
        let b = [4.4, 3.0, 1.3, 0.2];
        let ab = euclidean(&a, &b).unwrap();
        let ba = euclidean(&b, &a).unwrap();
        assert_abs_diff_eq!(ab, ba, epsilon = 1e-12);
    }

    #[test]
    fn test_iris_hand_computed() {
        let i = [6.3, 2.5, 5.0, 1.9];
        let j = [4.4, 3.0, 1.3, 0.2];
        let k = [5.9, 3.2, 4.8, 1.8];

        assert_abs_diff_eq!(
            euclidean(&i, &j).unwrap(),
            4.521061822182927,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            euclidean(&i, &k).unwrap(),
            0.8366600265340756,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_single_element() {
        // |10 - 7| = 3
        assert_abs_diff_eq!(euclidean(&[10.0], &[7.0]).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pythagorean_triple() {
        let a = [0.0, 0.0];
        let b = [3.0, 4.0];
        assert_abs_diff_eq!(euclidean(&a, &b).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_left() {
        assert!(matches!(euclidean(&[], &[1.0]), Err(KnnError::EmptyVector)));
    }

    #[test]
    fn test_empty_right() {
        assert!(matches!(euclidean(&[1.0], &[]), Err(KnnError::EmptyVector)));
    }

    #[test]
    fn test_both_empty() {
        assert!(matches!(euclidean(&[], &[]), Err(KnnError::EmptyVector)));
    }

    #[test]
    fn test_length_mismatch() {
        let result = euclidean(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(KnnError::LengthMismatch { left: 3, right: 2 })
        ));
    }
}
