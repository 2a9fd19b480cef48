//! # petal-io
//!
//! Load labeled tabular datasets from CSV files into the workspace's
//! row-of-`f64` representation. Category names in the trailing column are
//! resolved through an injected [`LabelVocabulary`] into stable numeric
//! codes at load time.

mod csv_read;
mod dataset;
mod error;
mod labels;

pub use csv_read::{parse_record, read_csv};
pub use dataset::Dataset;
pub use error::IoError;
pub use labels::LabelVocabulary;
