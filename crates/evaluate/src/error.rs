//! Error types for the petal-evaluate crate.

use petal_knn::KnnError;

/// Error type for all fallible operations in the petal-evaluate crate.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    /// Returned when the fold count is zero or exceeds the dataset size.
    #[error("cannot split {n_rows} row(s) into {num_folds} fold(s)")]
    InvalidFoldCount {
        /// The requested number of folds.
        num_folds: usize,
        /// Number of rows in the dataset.
        n_rows: usize,
    },

    /// Returned when accuracy is computed over zero test rows.
    #[error("accuracy over an empty fold is undefined")]
    EmptyFold,

    /// Returned when actual and predicted label sequences differ in length.
    #[error("prediction count mismatch: {actual} actual vs {predicted} predicted")]
    PredictionCountMismatch {
        /// Number of actual labels.
        actual: usize,
        /// Number of predicted labels.
        predicted: usize,
    },

    /// Wraps an error originating from the petal-knn crate.
    #[error("classification error: {reason}")]
    Classification {
        /// Description of the underlying classification failure.
        reason: String,
    },

    /// Returned when serializing the evaluation report fails.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying serialization failure.
        reason: String,
    },
}

impl From<KnnError> for EvaluateError {
    fn from(e: KnnError) -> Self {
        EvaluateError::Classification {
            reason: e.to_string(),
        }
    }
}
