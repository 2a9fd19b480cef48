//! Brute-force K-nearest-neighbors classification.
//!
//! This crate classifies numeric feature vectors by majority vote among
//! their k nearest training rows under Euclidean distance. Training rows
//! carry a numeric label code in the last position; queries are bare
//! feature vectors. Search is exact and O(n) per query — appropriate for
//! the small tabular datasets this workspace targets.
//!
//! # Quick start
//!
//! ```
//! use petal_knn::predict;
//!
//! let training = vec![
//!     vec![1.0, 1.0, 0.0],
//!     vec![1.2, 0.8, 0.0],
//!     vec![8.0, 8.0, 1.0],
//! ];
//!
//! let label = predict(&training, &[1.1, 0.9], 2).unwrap();
//! assert_eq!(label, 0.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! predict()              (classify.rs)
//!   ├─ k_nearest()       (neighbors.rs)
//!   │    └─ euclidean()  (distance.rs)
//!   └─ majority_label()  (vote.rs)
//! ```

pub mod classify;
pub mod distance;
pub mod error;
pub mod neighbors;
pub mod vote;

pub use classify::predict;
pub use distance::euclidean;
pub use error::KnnError;
pub use neighbors::k_nearest;
pub use vote::majority_label;
