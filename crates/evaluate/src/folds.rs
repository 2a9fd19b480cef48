//! Round-robin fold partitioning.

use crate::error::EvaluateError;

/// Splits `dataset` into `num_folds` folds by round-robin assignment:
/// row `i` goes to fold `i % num_folds`.
///
/// The folds form a complete, non-overlapping partition of the dataset.
/// Fold sizes differ by at most one and rows keep their original relative
/// order within each fold.
///
/// # Errors
///
/// Returns [`EvaluateError::InvalidFoldCount`] when `num_folds` is zero or
/// exceeds the number of rows.
pub fn split_into_folds(
    dataset: &[Vec<f64>],
    num_folds: usize,
) -> Result<Vec<Vec<Vec<f64>>>, EvaluateError> {
    if num_folds == 0 || num_folds > dataset.len() {
        return Err(EvaluateError::InvalidFoldCount {
            num_folds,
            n_rows: dataset.len(),
        });
    }

    let mut folds: Vec<Vec<Vec<f64>>> = vec![Vec::new(); num_folds];
    for (i, row) in dataset.iter().enumerate() {
        folds[i % num_folds].push(row.clone());
    }

    Ok(folds)
}

/// Concatenates every fold except `exclude`, in fold order.
///
/// This is the training set for the fold held out at index `exclude`. The
/// folds slice is not modified; rows are cloned into a fresh vector.
pub fn training_for_fold(folds: &[Vec<Vec<f64>>], exclude: usize) -> Vec<Vec<f64>> {
    folds
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != exclude)
        .flat_map(|(_, fold)| fold.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_rows() -> Vec<Vec<f64>> {
        vec![
            vec![5.1, 3.5, 1.4, 0.2, 1.0],
            vec![4.9, 3.0, 1.4, 0.2, 1.0],
            vec![7.0, 3.2, 4.7, 1.4, 2.0],
            vec![6.4, 3.2, 4.5, 1.5, 2.0],
            vec![7.7, 3.8, 6.7, 2.2, 3.0],
        ]
    }

    #[test]
    fn test_two_folds() {
        let folds = split_into_folds(&five_rows(), 2).unwrap();
        assert_eq!(
            folds,
            vec![
                vec![
                    vec![5.1, 3.5, 1.4, 0.2, 1.0],
                    vec![7.0, 3.2, 4.7, 1.4, 2.0],
                    vec![7.7, 3.8, 6.7, 2.2, 3.0],
                ],
                vec![
                    vec![4.9, 3.0, 1.4, 0.2, 1.0],
                    vec![6.4, 3.2, 4.5, 1.5, 2.0],
                ],
            ]
        );
    }

    #[test]
    fn test_three_folds_round_robin() {
        let folds = split_into_folds(&five_rows(), 3).unwrap();
        let sizes: Vec<usize> = folds.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(
            folds,
            vec![
                vec![
                    vec![5.1, 3.5, 1.4, 0.2, 1.0],
                    vec![6.4, 3.2, 4.5, 1.5, 2.0],
                ],
                vec![
                    vec![4.9, 3.0, 1.4, 0.2, 1.0],
                    vec![7.7, 3.8, 6.7, 2.2, 3.0],
                ],
                vec![vec![7.0, 3.2, 4.7, 1.4, 2.0]],
            ]
        );
    }

    #[test]
    fn test_four_folds() {
        let folds = split_into_folds(&five_rows(), 4).unwrap();
        assert_eq!(
            folds,
            vec![
                vec![
                    vec![5.1, 3.5, 1.4, 0.2, 1.0],
                    vec![7.7, 3.8, 6.7, 2.2, 3.0],
                ],
                vec![vec![4.9, 3.0, 1.4, 0.2, 1.0]],
                vec![vec![7.0, 3.2, 4.7, 1.4, 2.0]],
                vec![vec![6.4, 3.2, 4.5, 1.5, 2.0]],
            ]
        );
    }

    #[test]
    fn test_partition_is_complete() {
        let rows = five_rows();
        for num_folds in 1..=rows.len() {
            let folds = split_into_folds(&rows, num_folds).unwrap();
            let total: usize = folds.iter().map(Vec::len).sum();
            assert_eq!(total, rows.len());
            // Every original row appears in exactly one fold.
            for row in &rows {
                let occurrences: usize = folds
                    .iter()
                    .map(|f| f.iter().filter(|r| *r == row).count())
                    .sum();
                assert_eq!(occurrences, 1);
            }
        }
    }

    #[test]
    fn test_fold_sizes_differ_by_at_most_one() {
        let rows = five_rows();
        for num_folds in 1..=rows.len() {
            let folds = split_into_folds(&rows, num_folds).unwrap();
            let min = folds.iter().map(Vec::len).min().unwrap();
            let max = folds.iter().map(Vec::len).max().unwrap();
            assert!(max - min <= 1);
        }
    }

    #[test]
    fn test_error_zero_folds() {
        let result = split_into_folds(&five_rows(), 0);
        assert!(matches!(
            result,
            Err(EvaluateError::InvalidFoldCount {
                num_folds: 0,
                n_rows: 5
            })
        ));
    }

    #[test]
    fn test_error_more_folds_than_rows() {
        let result = split_into_folds(&five_rows(), 6);
        assert!(matches!(
            result,
            Err(EvaluateError::InvalidFoldCount {
                num_folds: 6,
                n_rows: 5
            })
        ));
    }

    #[test]
    fn test_training_excludes_held_out_fold() {
        let rows = five_rows();
        let folds = split_into_folds(&rows, 3).unwrap();
        for i in 0..folds.len() {
            let training = training_for_fold(&folds, i);
            assert_eq!(training.len(), rows.len() - folds[i].len());
            for row in &folds[i] {
                assert!(!training.contains(row));
            }
        }
    }

    #[test]
    fn test_training_preserves_fold_order() {
        let rows = five_rows();
        let folds = split_into_folds(&rows, 3).unwrap();
        let training = training_for_fold(&folds, 1);
        let expected: Vec<Vec<f64>> = folds[0].iter().chain(folds[2].iter()).cloned().collect();
        assert_eq!(training, expected);
    }

    #[test]
    fn test_training_does_not_mutate_folds() {
        let rows = five_rows();
        let folds = split_into_folds(&rows, 3).unwrap();
        let before = folds.clone();
        let _ = training_for_fold(&folds, 0);
        assert_eq!(folds, before);
    }
}
