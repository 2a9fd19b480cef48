//! Cross-validation configuration.

use crate::error::EvaluateError;

/// Configuration for a cross-validation run.
///
/// # Example
///
/// ```
/// use petal_evaluate::CvConfig;
///
/// let config = CvConfig::new(5, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CvConfig {
    /// Number of nearest neighbors per prediction.
    k: usize,
    /// Number of folds.
    num_folds: usize,
}

impl CvConfig {
    /// Creates a new configuration.
    pub fn new(k: usize, num_folds: usize) -> Self {
        Self { k, num_folds }
    }

    /// Returns the number of nearest neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the number of folds.
    pub fn num_folds(&self) -> usize {
        self.num_folds
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `num_folds` is zero. The upper bound on
    /// `num_folds` depends on the dataset and is checked at split time;
    /// likewise `k` is checked against the per-fold training set size.
    pub fn validate(&self) -> Result<(), EvaluateError> {
        if self.num_folds == 0 {
            return Err(EvaluateError::InvalidFoldCount {
                num_folds: 0,
                n_rows: 0,
            });
        }
        if self.k == 0 {
            return Err(EvaluateError::Classification {
                reason: format!("k must be >= 1, got {}", self.k),
            });
        }
        Ok(())
    }
}
