//! In-memory dataset container.

use crate::error::IoError;

/// An immutable, rectangular set of labeled feature rows.
///
/// Every row holds `n_features` decimal values followed by one numeric
/// label code in the last position. Shape is validated at construction and
/// the rows are never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Vec<f64>>,
    n_columns: usize,
}

impl Dataset {
    /// Builds a dataset from parsed rows, validating shape.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::EmptyDataset`] for zero rows,
    /// [`IoError::TooFewFields`] if the first row lacks a feature slot, and
    /// [`IoError::RaggedRow`] when any row's width differs from the first
    /// row's. Line numbers in these errors are 1-based row positions.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, IoError> {
        let first = rows.first().ok_or(IoError::EmptyDataset)?;
        let n_columns = first.len();
        if n_columns < 2 {
            return Err(IoError::TooFewFields {
                line: 1,
                got: n_columns,
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_columns {
                return Err(IoError::RaggedRow {
                    line: i + 1,
                    expected: n_columns,
                    got: row.len(),
                });
            }
        }
        Ok(Self { rows, n_columns })
    }

    /// Returns the rows, each with its trailing label code.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the total column count, label included.
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    /// Returns the number of feature columns (all but the label).
    pub fn n_features(&self) -> usize {
        self.n_columns - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_accessors() {
        let ds = Dataset::from_rows(vec![
            vec![5.1, 3.5, 1.4, 0.2, 1.0],
            vec![4.9, 3.0, 1.4, 0.2, 1.0],
        ])
        .unwrap();
        assert_eq!(ds.n_rows(), 2);
        assert_eq!(ds.n_columns(), 5);
        assert_eq!(ds.n_features(), 4);
        assert_eq!(ds.rows()[1][0], 4.9);
    }

    #[test]
    fn test_error_empty() {
        assert!(matches!(
            Dataset::from_rows(Vec::new()),
            Err(IoError::EmptyDataset)
        ));
    }

    #[test]
    fn test_error_label_only_row() {
        let result = Dataset::from_rows(vec![vec![1.0]]);
        assert!(matches!(
            result,
            Err(IoError::TooFewFields { line: 1, got: 1 })
        ));
    }

    #[test]
    fn test_error_ragged() {
        let result = Dataset::from_rows(vec![vec![1.0, 2.0, 0.0], vec![1.0, 0.0]]);
        assert!(matches!(
            result,
            Err(IoError::RaggedRow {
                line: 2,
                expected: 3,
                got: 2
            })
        ));
    }
}
