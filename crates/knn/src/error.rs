//! Error types for the petal-knn crate.

/// Error type for all fallible operations in the petal-knn crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KnnError {
    /// Returned when a feature vector has zero length.
    #[error("empty feature vector")]
    EmptyVector,

    /// Returned when two vectors passed to the distance function differ in length.
    #[error("vector length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left-hand vector.
        left: usize,
        /// Length of the right-hand vector.
        right: usize,
    },

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when k exceeds the number of available training rows.
    #[error("k = {k} exceeds available training rows ({available})")]
    InsufficientData {
        /// The requested neighbor count.
        k: usize,
        /// Number of training rows actually available.
        available: usize,
    },
}
