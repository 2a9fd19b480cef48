//! K-fold cross-validation for the petal KNN classifier.
//!
//! Splits a labeled dataset into folds by round-robin assignment, holds
//! each fold out in turn, trains the classifier on the concatenation of
//! the remaining folds, and scores per-fold accuracy.
//!
//! # Quick start
//!
//! ```
//! use petal_evaluate::{CvConfig, cross_validate};
//!
//! let dataset = vec![
//!     vec![1.0, 1.0, 0.0],
//!     vec![1.1, 0.9, 0.0],
//!     vec![0.9, 1.2, 0.0],
//!     vec![8.0, 8.0, 1.0],
//!     vec![8.2, 7.9, 1.0],
//!     vec![7.9, 8.1, 1.0],
//! ];
//!
//! let scores = cross_validate(&dataset, &CvConfig::new(1, 3)).unwrap();
//! assert_eq!(scores.len(), 3);
//! ```
//!
//! # Architecture
//!
//! ```text
//! cross_validate()
//!   ├─ split_into_folds()     (folds.rs)
//!   ├─ training_for_fold()    (folds.rs)
//!   ├─ petal_knn::predict()   (per held-out row)
//!   └─ accuracy()             (accuracy.rs)
//! ```

mod accuracy;
mod config;
mod error;
mod folds;
mod output;

pub use accuracy::accuracy;
pub use config::CvConfig;
pub use error::EvaluateError;
pub use folds::{split_into_folds, training_for_fold};
pub use output::{ConfigSummary, CrossValidationOutput, FoldScore, to_json};

use petal_knn::predict;

/// Runs leave-one-fold-out cross-validation over `dataset`.
///
/// Returns one accuracy percentage per fold, in fold-index order. For each
/// fold, the training set is every other fold concatenated in fold order —
/// never the held-out rows themselves.
///
/// # Errors
///
/// Returns [`EvaluateError::InvalidFoldCount`] for a zero or oversized fold
/// count, [`EvaluateError::Classification`] when a prediction fails (for
/// example k exceeding the training rows of some fold), and
/// [`EvaluateError::EmptyFold`] if a fold ends up with zero test rows.
pub fn cross_validate(dataset: &[Vec<f64>], config: &CvConfig) -> Result<Vec<f64>, EvaluateError> {
    config.validate()?;

    let folds = split_into_folds(dataset, config.num_folds())?;
    let mut scores = Vec::with_capacity(folds.len());

    for (index, test_fold) in folds.iter().enumerate() {
        let training = training_for_fold(&folds, index);

        let mut actual = Vec::with_capacity(test_fold.len());
        let mut predicted = Vec::with_capacity(test_fold.len());
        for row in test_fold {
            let features = &row[..row.len() - 1];
            predicted.push(predict(&training, features, config.k())?);
            actual.push(row[row.len() - 1]);
        }

        scores.push(accuracy(&actual, &predicted)?);
    }

    Ok(scores)
}
